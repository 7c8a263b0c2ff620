//! Network module.
//!
//! Holds the socket address an application endpoint should use. The address
//! is resolved from the configured host and port during initialisation; the
//! module does not open any sockets itself.

use crate::{register_module, Module, ModuleError};
use classloader_types::{ConfigSchema, Field, FieldType, Schema};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

/// Settings of the network module.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkModuleConfig {
	/// IP address to use. Defaults to 127.0.0.1.
	#[serde(default = "default_host")]
	pub host: String,
	/// Port to use. Defaults to 8080.
	#[serde(default = "default_port")]
	pub port: u16,
}

fn default_host() -> String {
	"127.0.0.1".to_string()
}

fn default_port() -> u16 {
	8080
}

impl Default for NetworkModuleConfig {
	fn default() -> Self {
		Self {
			host: default_host(),
			port: default_port(),
		}
	}
}

#[derive(Debug, Default)]
pub struct NetworkModule {
	config: NetworkModuleConfig,
	address: Option<SocketAddr>,
}

impl NetworkModule {
	/// Resolved address, available after a successful `init`.
	pub fn address(&self) -> Option<SocketAddr> {
		self.address
	}
}

impl Module for NetworkModule {
	fn name(&self) -> &'static str {
		"NetworkModule"
	}

	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(Schema::new(
			vec![],
			vec![
				Field::new("host", FieldType::String),
				Field::new(
					"port",
					FieldType::Integer {
						min: Some(1),
						max: Some(65535),
					},
				),
			],
		))
	}

	fn configure(&mut self, config: &toml::Value) -> Result<(), ModuleError> {
		self.config_schema().validate(config)?;
		self.config = config.clone().try_into().map_err(|e| {
			ModuleError::Configuration(format!("Invalid network module config: {}", e))
		})?;
		Ok(())
	}

	fn init(&mut self) -> Result<(), ModuleError> {
		let ip: IpAddr = self.config.host.parse().map_err(|_| {
			ModuleError::Init(format!("Invalid host address '{}'", self.config.host))
		})?;
		let address = SocketAddr::new(ip, self.config.port);

		self.address = Some(address);
		tracing::info!(module = self.name(), %address, "Module initialized");
		Ok(())
	}

	fn is_initialized(&self) -> bool {
		self.address.is_some()
	}
}

register_module!(NetworkModule);
