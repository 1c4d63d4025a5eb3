//! Order pipeline state store for the backoffice system.
//!
//! This module owns the in-memory order state the dashboard works against:
//! the current page of orders and the cross-page set of prioritized orders.
//! All pipeline mutations go through the store, which confirms every change
//! with the remote order API before committing it locally. On a remote
//! failure the local state is left at its last-known-good value and the
//! error is surfaced to the caller; the store never retries and never
//! queues work for later.

use backoffice_client::ApiError;
use thiserror::Error;

mod store;

pub use store::{OrderStore, PageView};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error that occurs when an order id is unknown to both local views.
	#[error("Order not found: {0}")]
	OrderNotFound(String),
	/// Error that occurs when a remote call fails. The underlying error is
	/// passed through unchanged; the caller decides user messaging.
	#[error("API error: {0}")]
	Api(#[from] ApiError),
}
