//! Module host.
//!
//! Turns a set of configured module names into running modules: each name is
//! resolved to a factory through the registry, the factory builds the module,
//! and the module is configured and initialised. Modules are processed in
//! name order; no dependency ordering between modules is attempted.

use crate::{Module, ModuleError, ModuleFactoryBase};
use classloader_core::{LibraryManager, LookupError};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while building or starting modules.
#[derive(Debug, Error)]
pub enum HostError {
	/// The configuration names a module nobody registered.
	#[error("Unknown module '{name}'. Available: [{available}]")]
	UnknownModule { name: String, available: String },
	/// The registry refused the lookup for another reason.
	#[error("Lookup failed: {0}")]
	Lookup(#[from] LookupError),
	/// A module failed to configure or initialise.
	#[error("Module '{name}' failed: {source}")]
	Module {
		name: String,
		#[source]
		source: ModuleError,
	},
}

/// Owns the modules created for one configuration.
pub struct ModuleHost {
	modules: Vec<(String, Box<dyn Module>)>,
}

impl ModuleHost {
	/// Creates and configures one module per entry of `implementations`.
	pub fn build(
		manager: &LibraryManager,
		implementations: &HashMap<String, toml::Value>,
	) -> Result<Self, HostError> {
		let mut names: Vec<&String> = implementations.keys().collect();
		names.sort();

		let mut modules = Vec::with_capacity(names.len());
		for name in names {
			let factory = manager
				.create::<dyn ModuleFactoryBase>(name)
				.map_err(|e| match e {
					e if e.is_not_found() => HostError::UnknownModule {
						name: name.clone(),
						available: manager
							.classes::<dyn ModuleFactoryBase>()
							.into_iter()
							.map(|info| info.class_name)
							.collect::<Vec<_>>()
							.join(", "),
					},
					e => HostError::Lookup(e),
				})?;

			let mut module = factory.create_module();
			if let Err(e) = module.configure(&implementations[name]) {
				tracing::error!(
					component = "module",
					implementation = %name,
					error = %e,
					"Failed to configure module"
				);
				return Err(HostError::Module {
					name: name.clone(),
					source: e,
				});
			}

			tracing::info!(component = "module", implementation = %name, "Loaded");
			modules.push((name.clone(), module));
		}

		Ok(Self { modules })
	}

	/// Initialises every module, stopping at the first failure.
	pub fn init_all(&mut self) -> Result<(), HostError> {
		for (name, module) in &mut self.modules {
			module.init().map_err(|source| HostError::Module {
				name: name.clone(),
				source,
			})?;
		}
		tracing::info!(modules = self.modules.len(), "All modules initialized");
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<&dyn Module> {
		self.modules
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, module)| module.as_ref())
	}

	/// Module names in initialisation order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.modules.iter().map(|(name, _)| name.as_str())
	}

	pub fn len(&self) -> usize {
		self.modules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.modules.is_empty()
	}
}
