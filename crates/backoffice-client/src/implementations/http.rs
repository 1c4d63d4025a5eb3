//! HTTP implementation of the order API client.
//!
//! This module talks JSON to the remote order system over reqwest. All
//! non-success responses are mapped into [`ApiError`] variants; nothing is
//! retried here, the store surfaces every failure to its caller.

use crate::{ApiError, OrdersApiInterface};
use async_trait::async_trait;
use backoffice_types::{ConfigSchema, Field, FieldType, OrderPage, OrderRecord, Schema};
use std::time::Duration;

/// Default request timeout when the configuration does not set one.
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Order API client backed by the remote HTTP service.
pub struct HttpOrdersApi {
	/// Pooled HTTP client.
	client: reqwest::Client,
	/// Base URL of the remote API, without trailing slash.
	base_url: String,
}

impl HttpOrdersApi {
	/// Creates a new client against the given base URL.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
		let client = reqwest::Client::builder()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(10)
			.timeout(timeout)
			.build()
			.map_err(|e| ApiError::Network(e.to_string()))?;

		let base_url = base_url.into().trim_end_matches('/').to_string();
		Ok(Self { client, base_url })
	}

	fn orders_url(&self) -> String {
		format!("{}/orders", self.base_url)
	}

	fn order_url(&self, id: &str) -> String {
		format!("{}/orders/{}", self.base_url, id)
	}

	fn status_url(&self, id: &str) -> String {
		format!("{}/orders/{}/status", self.base_url, id)
	}

	/// Maps a non-success response to the matching error variant.
	async fn check(
		response: reqwest::Response,
		id: Option<&str>,
	) -> Result<reqwest::Response, ApiError> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}

		if status == reqwest::StatusCode::NOT_FOUND {
			if let Some(id) = id {
				return Err(ApiError::NotFound(id.to_string()));
			}
		}

		let message = response.text().await.unwrap_or_default();
		Err(ApiError::Api {
			status: status.as_u16(),
			message,
		})
	}
}

#[async_trait]
impl OrdersApiInterface for HttpOrdersApi {
	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(HttpOrdersApiSchema)
	}

	async fn list_orders(
		&self,
		page: u32,
		page_size: u32,
		prioritized_only: Option<bool>,
	) -> Result<OrderPage, ApiError> {
		let mut request = self
			.client
			.get(self.orders_url())
			.query(&[("page", page), ("pageSize", page_size)]);
		if let Some(flag) = prioritized_only {
			request = request.query(&[("prioritized", flag)]);
		}

		let response = request
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		let response = Self::check(response, None).await?;
		response
			.json::<OrderPage>()
			.await
			.map_err(|e| ApiError::Serialization(e.to_string()))
	}

	async fn get_order(&self, id: &str) -> Result<OrderRecord, ApiError> {
		let response = self
			.client
			.get(self.order_url(id))
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		let response = Self::check(response, Some(id)).await?;
		response
			.json::<OrderRecord>()
			.await
			.map_err(|e| ApiError::Serialization(e.to_string()))
	}

	async fn update_order_status(&self, id: &str, status_token: &str) -> Result<(), ApiError> {
		let body = serde_json::json!({ "status": status_token });
		let response = self
			.client
			.put(self.status_url(id))
			.json(&body)
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		Self::check(response, Some(id)).await?;
		Ok(())
	}

	async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
		let response = self
			.client
			.delete(self.order_url(id))
			.send()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;
		Self::check(response, Some(id)).await?;
		Ok(())
	}
}

/// Configuration schema for HttpOrdersApi.
pub struct HttpOrdersApiSchema;

impl ConfigSchema for HttpOrdersApiSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), backoffice_types::ValidationError> {
		let schema = Schema::new(
			vec![
				Field::new("base_url", FieldType::String).with_validator(|value| {
					match value.as_str() {
						Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
							Ok(())
						},
						Some(_) => Err("must start with http:// or https://".to_string()),
						None => Err("must be a string".to_string()),
					}
				}),
			],
			vec![Field::new(
				"timeout_seconds",
				FieldType::Integer {
					min: Some(1),
					max: Some(600),
				},
			)],
		);
		schema.validate(config)
	}
}

/// Factory function to create an HTTP order API client from configuration.
///
/// Configuration parameters:
/// - `base_url`: Base URL of the remote order API (required)
/// - `timeout_seconds`: Per-request timeout (default: 30)
pub fn create_api(config: &toml::Value) -> Result<Box<dyn OrdersApiInterface>, ApiError> {
	HttpOrdersApiSchema
		.validate(config)
		.map_err(|e| ApiError::Config(e.to_string()))?;

	let base_url = config
		.get("base_url")
		.and_then(|v| v.as_str())
		.unwrap_or_default()
		.to_string();
	let timeout_seconds = config
		.get("timeout_seconds")
		.and_then(|v| v.as_integer())
		.unwrap_or(DEFAULT_TIMEOUT_SECONDS as i64) as u64;

	let api = HttpOrdersApi::new(base_url, Duration::from_secs(timeout_seconds))?;
	Ok(Box::new(api))
}
