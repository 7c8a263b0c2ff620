//! Process-wide class registry.
//!
//! The registry is the composition root of the service: every
//! self-registration linked into the binary is applied once, in a fixed
//! order, and the registry is sealed before anything looks a class up.

use classloader_config::Config;
use classloader_core::{DescriptorInfo, LibraryManager, RegistryError};
use classloader_module::{HostError, ModuleHost};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("Duplicate class registrations detected and strict_duplicates is enabled")]
	DuplicateRegistrations,
	#[error(transparent)]
	Host(#[from] HostError),
}

static REGISTRY: OnceLock<LibraryManager> = OnceLock::new();

/// Builds a sealed registry holding every collected registration.
pub fn build_registry() -> Result<LibraryManager, RegistryError> {
	let registry = LibraryManager::new();
	let summary = registry.install_collected();
	registry.seal()?;

	tracing::info!(
		registered = summary.registered,
		duplicates = summary.duplicates,
		rejected = summary.rejected,
		interfaces = registry.interfaces().len(),
		"Class registry ready"
	);
	Ok(registry)
}

/// Returns the global registry, building it on first use.
pub fn initialize_registry() -> Result<&'static LibraryManager, RegistryError> {
	if let Some(registry) = REGISTRY.get() {
		return Ok(registry);
	}
	let registry = build_registry()?;
	Ok(REGISTRY.get_or_init(|| registry))
}

/// Creates, configures and initialises every module named in the config.
pub fn build_host(registry: &LibraryManager, config: &Config) -> Result<ModuleHost, ServiceError> {
	if config.loader.strict_duplicates && registry.has_duplicates() {
		return Err(ServiceError::DuplicateRegistrations);
	}

	let mut host = ModuleHost::build(registry, &config.modules.implementations)?;
	host.init_all()?;
	Ok(host)
}

/// Renders registered classes for `--list`.
pub fn render_listing(classes: &[DescriptorInfo], json: bool) -> Result<String, serde_json::Error> {
	if json {
		return serde_json::to_string_pretty(classes);
	}

	let mut out = String::new();
	for info in classes {
		out.push_str(&format!(
			"{}\t{}\t{}\n",
			info.interface,
			info.class_name,
			info.library.as_deref().unwrap_or("-")
		));
	}
	Ok(out)
}
