//! Configuration module for the backoffice service.
//!
//! This module provides structures and utilities for managing the service
//! configuration. It supports loading configuration from TOML files with
//! `${VAR}` / `${VAR:-default}` environment-variable substitution and
//! validates that all required values are properly set before the service
//! starts.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
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
		// Keep the message, drop the input dump the error carries along
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the backoffice service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the remote order API client.
	pub api: ApiConfig,
	/// Configuration for the order pipeline store.
	#[serde(default)]
	pub store: StoreConfig,
	/// Configuration for the HTTP server.
	pub server: Option<ServerConfig>,
}

/// Configuration for the remote order API client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
	/// Which client implementation to use.
	pub primary: String,
	/// Map of client implementation names to their configurations.
	pub implementations: HashMap<String, toml::Value>,
}

/// Configuration for the order pipeline store.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
	/// Page size used when the dashboard requests no explicit size.
	#[serde(default = "default_page_size")]
	pub page_size: u32,
	/// Upper bound on pages walked when seeding the prioritized set.
	#[serde(default = "default_priority_scan_pages")]
	pub priority_scan_pages: u32,
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self {
			page_size: default_page_size(),
			priority_scan_pages: default_priority_scan_pages(),
		}
	}
}

/// Returns the default dashboard page size.
fn default_page_size() -> u32 {
	10
}

/// Returns the default bound for the startup priority scan.
fn default_priority_scan_pages() -> u32 {
	5
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
	/// Whether the HTTP server should be started.
	#[serde(default = "default_server_enabled")]
	pub enabled: bool,
	/// Host address to bind.
	#[serde(default = "default_server_host")]
	pub host: String,
	/// Port to listen on.
	#[serde(default = "default_server_port")]
	pub port: u16,
}

fn default_server_enabled() -> bool {
	true
}

fn default_server_host() -> String {
	"127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
	8080
}

impl Config {
	/// Loads configuration from a TOML file.
	pub fn from_file(path: &str) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		content.parse()
	}

	/// Loads configuration from a TOML file without blocking the runtime.
	pub async fn from_file_async(path: &str) -> Result<Self, ConfigError> {
		let content = tokio::fs::read_to_string(path).await?;
		content.parse()
	}

	/// Validates the configuration values.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.api.primary.is_empty() {
			return Err(ConfigError::Validation(
				"api.primary must not be empty".into(),
			));
		}
		if !self.api.implementations.contains_key(&self.api.primary) {
			return Err(ConfigError::Validation(format!(
				"api.primary '{}' has no matching entry in api.implementations",
				self.api.primary
			)));
		}
		if self.store.page_size == 0 {
			return Err(ConfigError::Validation(
				"store.page_size must be at least 1".into(),
			));
		}
		if self.store.priority_scan_pages == 0 {
			return Err(ConfigError::Validation(
				"store.priority_scan_pages must be at least 1".into(),
			));
		}
		Ok(())
	}
}

impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}

/// Substitutes `${VAR}` and `${VAR:-default}` references with environment
/// values. A reference without a default fails when the variable is unset,
/// so missing secrets are caught at startup.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	// Cap the input size before running the regex over it
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

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).unwrap();
		let var_name = cap.get(1).unwrap().as_str();
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => {
				if let Some(default) = default_value {
					default.to_string()
				} else {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)));
				}
			},
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements back to front so earlier offsets stay valid
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(start..end, value);
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	const MINIMAL: &str = r#"
[api]
primary = "http"
[api.implementations.http]
base_url = "http://localhost:4000/api"

[server]
host = "127.0.0.1"
port = 8080
"#;

	#[test]
	fn parses_minimal_config_with_defaults() {
		let config: Config = MINIMAL.parse().unwrap();
		assert_eq!(config.api.primary, "http");
		assert_eq!(config.store.page_size, 10);
		assert_eq!(config.store.priority_scan_pages, 5);
		let server = config.server.unwrap();
		assert!(server.enabled);
		assert_eq!(server.port, 8080);
	}

	#[test]
	fn missing_api_section_is_a_parse_error() {
		let result: Result<Config, _> = "[store]\npage_size = 3".parse();
		assert!(matches!(result, Err(ConfigError::Parse(_))));
	}

	#[test]
	fn primary_without_implementation_is_rejected() {
		let result: Result<Config, _> = r#"
[api]
primary = "http"
[api.implementations.mock]
"#
		.parse::<Config>();
		let err = result.unwrap_err();
		assert!(err.to_string().contains("no matching entry"));
	}

	#[test]
	fn zero_page_size_is_rejected() {
		let result = format!("{}\n[store]\npage_size = 0\n", MINIMAL).parse::<Config>();
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[test]
	fn env_var_resolution() {
		std::env::set_var("BACKOFFICE_TEST_HOST", "orders.example.de");
		let input = "base_url = \"https://${BACKOFFICE_TEST_HOST}/api\"";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "base_url = \"https://orders.example.de/api\"");
		std::env::remove_var("BACKOFFICE_TEST_HOST");
	}

	#[test]
	fn env_var_default_applies_when_unset() {
		std::env::remove_var("BACKOFFICE_TEST_UNSET");
		let input = "port = ${BACKOFFICE_TEST_UNSET:-8080}";
		let result = resolve_env_vars(input).unwrap();
		assert_eq!(result, "port = 8080");
	}

	#[test]
	fn missing_env_var_without_default_fails() {
		std::env::remove_var("BACKOFFICE_TEST_MISSING");
		let input = "token = \"${BACKOFFICE_TEST_MISSING}\"";
		let result = resolve_env_vars(input);
		assert!(matches!(result, Err(ConfigError::Validation(_))));
	}

	#[tokio::test]
	async fn loads_from_file() {
		let temp_dir = TempDir::new().unwrap();
		let config_path = temp_dir.path().join("config.toml");
		fs::write(&config_path, MINIMAL).unwrap();

		let config = Config::from_file_async(config_path.to_str().unwrap())
			.await
			.unwrap();
		assert_eq!(config.api.primary, "http");

		let sync_config = Config::from_file(config_path.to_str().unwrap()).unwrap();
		assert_eq!(sync_config.store.page_size, config.store.page_size);
	}
}
