//! File module.
//!
//! Owns a working directory on the local filesystem. Initialisation checks
//! that the directory exists, creating it first when configured to.

use crate::{register_module, Module, ModuleError};
use classloader_types::{ConfigSchema, Field, FieldType, Schema};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings of the file module.
#[derive(Debug, Clone, Deserialize)]
pub struct FileModuleConfig {
	/// Working directory. Defaults to the current directory.
	#[serde(default = "default_root")]
	pub root: PathBuf,
	/// Create the working directory if it is missing.
	#[serde(default)]
	pub create_missing: bool,
}

fn default_root() -> PathBuf {
	PathBuf::from(".")
}

impl Default for FileModuleConfig {
	fn default() -> Self {
		Self {
			root: default_root(),
			create_missing: false,
		}
	}
}

#[derive(Debug, Default)]
pub struct FileModule {
	config: FileModuleConfig,
	initialized: bool,
}

impl FileModule {
	pub fn root(&self) -> &Path {
		&self.config.root
	}
}

impl Module for FileModule {
	fn name(&self) -> &'static str {
		"FileModule"
	}

	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(Schema::new(
			vec![],
			vec![
				Field::new("root", FieldType::String).with_validator(|value| {
					match value.as_str() {
						Some("") => Err("root must not be empty".to_string()),
						_ => Ok(()),
					}
				}),
				Field::new("create_missing", FieldType::Boolean),
			],
		))
	}

	fn configure(&mut self, config: &toml::Value) -> Result<(), ModuleError> {
		self.config_schema().validate(config)?;
		self.config = config
			.clone()
			.try_into()
			.map_err(|e| ModuleError::Configuration(format!("Invalid file module config: {}", e)))?;
		Ok(())
	}

	fn init(&mut self) -> Result<(), ModuleError> {
		let root = &self.config.root;
		if !root.exists() {
			if !self.config.create_missing {
				return Err(ModuleError::Init(format!(
					"Directory {} does not exist",
					root.display()
				)));
			}
			std::fs::create_dir_all(root)?;
			tracing::debug!(root = %root.display(), "Created working directory");
		} else if !root.is_dir() {
			return Err(ModuleError::Init(format!(
				"{} is not a directory",
				root.display()
			)));
		}

		self.initialized = true;
		tracing::info!(module = self.name(), root = %root.display(), "Module initialized");
		Ok(())
	}

	fn is_initialized(&self) -> bool {
		self.initialized
	}
}

register_module!(FileModule);
