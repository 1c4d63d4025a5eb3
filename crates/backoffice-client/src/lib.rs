//! Remote order API client module for the backoffice system.
//!
//! This module provides the seam between the pipeline store and the remote
//! order API. It defines the four operations the store consumes, supports
//! different client implementations such as the HTTP client used in
//! production or the in-memory mock used for tests and local development,
//! and wraps the chosen implementation in a typed service.

use async_trait::async_trait;
use backoffice_types::{ConfigSchema, OrderPage, OrderRecord};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod http;
	pub mod mock;
}

/// Errors that can occur during remote order API operations.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Error that occurs during network communication.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when a requested order does not exist remotely.
	#[error("Order not found: {0}")]
	NotFound(String),
	/// Error that occurs when the remote API answers with a non-success
	/// status.
	#[error("API error ({status}): {message}")]
	Api { status: u16, message: String },
	/// Error that occurs when a response body cannot be decoded.
	#[error("Serialization error: {0}")]
	Serialization(String),
	/// Error that occurs when an implementation is misconfigured.
	#[error("Invalid configuration: {0}")]
	Config(String),
}

/// Trait defining the interface for remote order API clients.
///
/// This trait must be implemented by any client backend that wants to
/// integrate with the pipeline store. It covers exactly the remote
/// operations the store consumes; everything else the remote system offers
/// is out of scope here.
#[async_trait]
pub trait OrdersApiInterface: Send + Sync {
	/// Returns the configuration schema for this client implementation.
	///
	/// The schema is used to validate the implementation's TOML section
	/// before the client is constructed.
	fn config_schema(&self) -> Box<dyn ConfigSchema>;

	/// Fetches one page of orders.
	///
	/// `page` is 1-based. When `prioritized_only` is set, the remote
	/// system filters by its own priority flag; `None` requests the
	/// unfiltered listing.
	async fn list_orders(
		&self,
		page: u32,
		page_size: u32,
		prioritized_only: Option<bool>,
	) -> Result<OrderPage, ApiError>;

	/// Fetches a single order by id.
	async fn get_order(&self, id: &str) -> Result<OrderRecord, ApiError>;

	/// Sets the status token of an order.
	///
	/// The token must be one of the six canonical pipeline tokens; it is
	/// forwarded verbatim.
	async fn update_order_status(&self, id: &str, status_token: &str) -> Result<(), ApiError>;

	/// Deletes an order.
	async fn delete_order(&self, id: &str) -> Result<(), ApiError>;
}

/// Service that fronts the configured order API client.
///
/// The service owns the boxed implementation, normalizes paging arguments
/// and logs each remote round-trip, so the store never talks to a backend
/// directly.
pub struct OrdersApiService {
	/// The underlying client implementation.
	backend: Box<dyn OrdersApiInterface>,
}

impl OrdersApiService {
	/// Creates a new OrdersApiService with the specified backend.
	pub fn new(backend: Box<dyn OrdersApiInterface>) -> Self {
		Self { backend }
	}

	/// Fetches one page of orders. A page argument of 0 is clamped to the
	/// first page.
	pub async fn list_orders(
		&self,
		page: u32,
		page_size: u32,
		prioritized_only: Option<bool>,
	) -> Result<OrderPage, ApiError> {
		let page = page.max(1);
		tracing::debug!(page, page_size, ?prioritized_only, "Listing orders");
		self.backend.list_orders(page, page_size, prioritized_only).await
	}

	/// Fetches a single order by id.
	pub async fn get_order(&self, id: &str) -> Result<OrderRecord, ApiError> {
		tracing::debug!(order = id, "Fetching order");
		self.backend.get_order(id).await
	}

	/// Sets the status token of an order.
	pub async fn update_order_status(&self, id: &str, status_token: &str) -> Result<(), ApiError> {
		tracing::debug!(order = id, status = status_token, "Updating order status");
		self.backend.update_order_status(id, status_token).await
	}

	/// Deletes an order.
	pub async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
		tracing::debug!(order = id, "Deleting order");
		self.backend.delete_order(id).await
	}
}
