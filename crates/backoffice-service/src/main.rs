//! Main entry point for the backoffice service.
//!
//! This binary wires the order pipeline store to the configured remote
//! API client, seeds the prioritized work queue, and serves the dashboard
//! HTTP API. Client implementations are pluggable; the configuration picks
//! one of the registered factories.

use backoffice_client::{ApiError, OrdersApiInterface, OrdersApiService};
use backoffice_config::Config;
use backoffice_store::OrderStore;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

mod apis;
mod server;

// Import implementations from the client crate
use backoffice_client::implementations::http::create_api as create_http_api;
use backoffice_client::implementations::mock::create_api as create_mock_api;

/// Command-line arguments for the backoffice service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Factory signature shared by all client implementations.
type ApiFactory = fn(&toml::Value) -> Result<Box<dyn OrdersApiInterface>, ApiError>;

/// Main entry point for the backoffice service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration from file
/// 4. Builds the order store with the configured client implementation
/// 5. Seeds the prioritized work queue
/// 6. Serves the dashboard HTTP API until interrupted
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt().with_env_filter(env_filter).with_target(true).init();

	tracing::info!("Started backoffice service");

	// Load configuration
	let config = Config::from_file_async(args.config.to_str().unwrap()).await?;
	tracing::info!("Loaded configuration [api: {}]", config.api.primary);

	// Build the store against the configured client implementation
	let store = Arc::new(build_store(&config)?);

	// Seed the prioritized work queue before serving requests. A failure
	// here is logged but not fatal: the dashboard starts with an empty
	// prioritized view and fills it on the next page loads.
	match store
		.load_all_prioritized(config.store.priority_scan_pages)
		.await
	{
		Ok(seeded) => tracing::info!(count = seeded.len(), "Prioritized orders seeded"),
		Err(e) => {
			tracing::warn!(error = %e, "Priority seeding failed, starting with an empty set")
		},
	}

	let server_enabled = config.server.as_ref().is_some_and(|server| server.enabled);

	if server_enabled {
		let server_config = config.server.as_ref().unwrap().clone();
		server::start_server(server_config, config.store.page_size, Arc::clone(&store)).await?;
	} else {
		tracing::warn!("HTTP server disabled, nothing to serve");
	}

	tracing::info!("Stopped backoffice service");
	Ok(())
}

/// Registry of available client implementations.
fn api_factories() -> HashMap<String, ApiFactory> {
	let mut factories: HashMap<String, ApiFactory> = HashMap::new();
	factories.insert("http".to_string(), create_http_api);
	factories.insert("mock".to_string(), create_mock_api);
	factories
}

/// Builds the order store with the configured client implementation.
fn build_store(config: &Config) -> Result<OrderStore, Box<dyn std::error::Error>> {
	let factories = api_factories();
	let factory = factories.get(config.api.primary.as_str()).ok_or_else(|| {
		format!("Unknown api implementation: {}", config.api.primary)
	})?;

	let impl_config = config
		.api
		.implementations
		.get(&config.api.primary)
		.ok_or_else(|| {
			format!(
				"Missing configuration for api implementation '{}'",
				config.api.primary
			)
		})?;

	let backend = factory(impl_config)?;
	Ok(OrderStore::new(OrdersApiService::new(backend)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use backoffice_config::{ApiConfig, StoreConfig};
	use tempfile::tempdir;
	use toml::Value;

	/// Creates a minimal test configuration backed by the mock client
	fn create_test_config() -> Config {
		Config {
			api: ApiConfig {
				primary: "mock".to_string(),
				implementations: {
					let mut map = HashMap::new();
					map.insert("mock".to_string(), Value::Table(toml::map::Map::new()));
					map
				},
			},
			store: StoreConfig::default(),
			server: None,
		}
	}

	#[test]
	fn test_args_default_values() {
		let args = Args {
			config: PathBuf::from("config.toml"),
			log_level: "info".to_string(),
		};

		assert_eq!(args.config, PathBuf::from("config.toml"));
		assert_eq!(args.log_level, "info");
	}

	#[test]
	fn test_api_factories_registry() {
		let factories = api_factories();

		assert_eq!(factories.len(), 2);
		assert!(factories.contains_key("http"));
		assert!(factories.contains_key("mock"));
	}

	#[tokio::test]
	async fn test_build_store_with_mock_config() {
		let config = create_test_config();

		let store = build_store(&config).expect("Failed to build store");

		// A fresh mock-backed store starts with no orders.
		assert!(store.current_page().await.is_empty());
		assert!(store.prioritized().await.is_empty());
	}

	#[test]
	fn test_build_store_rejects_unknown_implementation() {
		let mut config = create_test_config();
		config.api.primary = "grpc".to_string();

		let result = build_store(&config);
		assert!(result.is_err());
	}

	#[tokio::test]
	async fn test_build_store_from_config_file() {
		let temp_dir = tempdir().expect("Failed to create temp dir");
		let config_path = temp_dir.path().join("test_config.toml");

		let config_content = r#"
[api]
primary = "mock"
[api.implementations.mock]
seed_orders = 4

[store]
page_size = 2
priority_scan_pages = 3

[server]
host = "127.0.0.1"
port = 8090
"#;

		std::fs::write(&config_path, config_content).expect("Failed to write config");

		let config = Config::from_file(config_path.to_str().unwrap()).expect("Failed to load config");
		assert_eq!(config.store.page_size, 2);

		let store = build_store(&config).expect("Failed to build store");
		let page = store.load_page(1, 2).await.expect("Failed to load page");
		assert_eq!(page.orders.len(), 2);
		assert_eq!(page.total, 4);
		assert!(page.has_next_page);
	}
}
