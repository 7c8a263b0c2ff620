//! Configuration for the class loader service.
//!
//! Configuration is read from a TOML file. `${VAR}` and `${VAR:-default}`
//! references are replaced with environment values before parsing, and the
//! result is validated before it is handed to the service.
//!
//! Module settings are kept as raw TOML tables; each module validates its own
//! table against its schema when it is configured.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Keep the message, not the echoed input
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the class loader service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Identity and registry policy of this loader instance.
	pub loader: LoaderConfig,
	/// Modules to create at startup.
	#[serde(default)]
	pub modules: ModulesConfig,
}

/// Configuration specific to the loader instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoaderConfig {
	/// Unique identifier used in logs.
	pub id: String,
	/// Refuse to start when a duplicate class registration was seen.
	#[serde(default)]
	pub strict_duplicates: bool,
}

/// Configuration for the modules created by the service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ModulesConfig {
	/// Map of registered module names to their settings tables.
	#[serde(default)]
	pub implementations: HashMap<String, toml::Value>,
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB.
pub fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024;
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = String::with_capacity(input.len());
	let mut last = 0;
	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match cap.get(2) {
				Some(default) => default.as_str().to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)))
				},
			},
		};

		result.push_str(&input[last..full_match.start()]);
		result.push_str(&value);
		last = full_match.end();
	}
	result.push_str(&input[last..]);

	Ok(result)
}

impl Config {
	/// Loads configuration from a file, resolving environment variables.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path.as_ref()).await?;
		content.parse()
	}

	/// Validates the configuration.
	///
	/// - the loader ID is not empty
	/// - every module name is non-empty and maps to a table
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.loader.id.trim().is_empty() {
			return Err(ConfigError::Validation("Loader ID cannot be empty".into()));
		}

		for (name, settings) in &self.modules.implementations {
			if name.trim().is_empty() {
				return Err(ConfigError::Validation(
					"Module name cannot be empty".into(),
				));
			}
			if !settings.is_table() {
				return Err(ConfigError::Validation(format!(
					"Settings of module '{}' must be a table",
					name
				)));
			}
		}

		Ok(())
	}

	/// Configured module names in the order they are started.
	pub fn module_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self
			.modules
			.implementations
			.keys()
			.map(String::as_str)
			.collect();
		names.sort_unstable();
		names
	}
}

/// Parses configuration from a TOML string.
///
/// Environment variables are resolved first and the configuration is
/// validated after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
