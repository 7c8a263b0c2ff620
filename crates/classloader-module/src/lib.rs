//! Module plugins for the class loader.
//!
//! A module is a unit of application functionality with a configuration
//! table and an `init` step. Modules are not registered directly: each one
//! is wrapped in a [`ModuleFactory`] and registered under the
//! [`ModuleFactoryBase`] interface, so the registry hands out factories and
//! the factories hand out modules. The registry itself never needs to know
//! what a [`Module`] is.

use classloader_core::{LibraryManager, LookupError};
use classloader_types::{declare_interface, ConfigSchema, Implements, ValidationError};
use std::marker::PhantomData;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod file;
	pub mod network;
}

pub mod host;

pub use host::{HostError, ModuleHost};

#[doc(hidden)]
pub use classloader_core;

/// Errors that can occur while configuring or initialising a module.
#[derive(Debug, Error)]
pub enum ModuleError {
	/// The settings table failed schema validation.
	#[error("Validation error: {0}")]
	Validation(#[from] ValidationError),
	/// The settings table could not be deserialised.
	#[error("Configuration error: {0}")]
	Configuration(String),
	/// The module could not start.
	#[error("Initialization failed: {0}")]
	Init(String),
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// A pluggable unit of application functionality.
pub trait Module: Send {
	/// Name the module reports in logs.
	fn name(&self) -> &'static str;

	/// Returns the configuration schema for validation.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;

	/// Applies the module's settings table. Called before [`Module::init`];
	/// a module that is never configured runs with its defaults.
	fn configure(&mut self, config: &toml::Value) -> Result<(), ModuleError>;

	/// Brings the module up.
	fn init(&mut self) -> Result<(), ModuleError>;

	fn is_initialized(&self) -> bool;
}

/// Interface of the factories stored in the registry.
pub trait ModuleFactoryBase: Send + Sync {
	/// Creates a new module instance owned by the caller.
	fn create_module(&self) -> Box<dyn Module>;
}

declare_interface!(dyn ModuleFactoryBase, "ModuleFactoryBase");

/// Factory producing modules of type `M`.
pub struct ModuleFactory<M> {
	_module: PhantomData<fn() -> M>,
}

impl<M> Default for ModuleFactory<M> {
	fn default() -> Self {
		Self {
			_module: PhantomData,
		}
	}
}

impl<M: Module + Default + 'static> ModuleFactoryBase for ModuleFactory<M> {
	fn create_module(&self) -> Box<dyn Module> {
		Box::new(M::default())
	}
}

impl<M: Module + Default + 'static> Implements<dyn ModuleFactoryBase> for ModuleFactory<M> {
	fn upcast(self: Box<Self>) -> Box<dyn ModuleFactoryBase> {
		self
	}
}

/// Registers a module type with the class loader.
///
/// ```ignore
/// register_module!(FileModule);
/// register_module!(FileModule, "files");
/// ```
#[macro_export]
macro_rules! register_module {
	($module:ty, $name:expr) => {
		$crate::classloader_core::register_class!(
			$crate::ModuleFactory<$module> => dyn $crate::ModuleFactoryBase,
			$name
		);
	};
	($module:ty) => {
		$crate::register_module!($module, stringify!($module));
	};
}

/// Looks up the factory registered as `name` and builds one module from it.
pub fn create_module(manager: &LibraryManager, name: &str) -> Result<Box<dyn Module>, LookupError> {
	let factory = manager.create::<dyn ModuleFactoryBase>(name)?;
	Ok(factory.create_module())
}
