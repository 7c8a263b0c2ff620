//! Main entry point for the class loader service.
//!
//! Builds the process-wide class registry from every self-registration
//! linked into the binary, then either lists the registered classes or
//! creates and initialises the modules named in the configuration.

use clap::Parser;
use classloader_config::Config;
use std::path::PathBuf;

mod factory_registry;

use factory_registry::{build_host, initialize_registry, render_listing};

/// Command-line arguments for the class loader service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	/// Print the registered classes and exit
	#[arg(long)]
	list: bool,

	/// Print the class list as JSON
	#[arg(long, requires = "list")]
	json: bool,
}

/// Main entry point for the class loader service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Builds and seals the class registry
/// 4. Loads configuration from file
/// 5. Creates and initialises the configured modules
/// 6. Shuts the registry down
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	// stdout carries only command output
	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	let registry = initialize_registry()?;

	if args.list {
		print!("{}", render_listing(&registry.all_classes(), args.json)?);
		return Ok(());
	}

	tracing::info!("Started class loader");

	let config = Config::from_file(&args.config).await?;
	tracing::info!(
		modules = ?config.module_names(),
		"Loaded configuration [{}]",
		config.loader.id
	);

	let host = build_host(registry, &config)?;
	tracing::info!(modules = ?host.names().collect::<Vec<_>>(), "Modules running");
	drop(host);

	let released = registry.shutdown()?;
	tracing::info!(released, "Stopped class loader");
	Ok(())
}
