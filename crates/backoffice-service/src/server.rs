//! HTTP server for the backoffice API.
//!
//! This module provides the HTTP surface the dashboard frontend talks to:
//! routing, shared state, and CORS. The handlers live in [`crate::apis`].

use axum::{
	routing::{get, post, put},
	Router,
};
use backoffice_config::ServerConfig;
use backoffice_store::OrderStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::apis::orders;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// The order pipeline store behind all endpoints.
	pub store: Arc<OrderStore>,
	/// Page size used when the dashboard requests no explicit size.
	pub default_page_size: u32,
}

/// Starts the HTTP server for the backoffice API.
///
/// This function creates and configures the HTTP server with routing,
/// middleware, and error handling for all order endpoints.
pub async fn start_server(
	server_config: ServerConfig,
	default_page_size: u32,
	store: Arc<OrderStore>,
) -> Result<(), Box<dyn std::error::Error>> {
	let app_state = AppState {
		store,
		default_page_size,
	};

	// Build the router with /api base path
	let app = Router::new()
		.nest(
			"/api",
			Router::new()
				.route("/orders", get(orders::list_orders))
				.route("/orders/prioritized", get(orders::prioritized_orders))
				.route(
					"/orders/{id}",
					get(orders::get_order).delete(orders::delete_order),
				)
				.route("/orders/{id}/advance", post(orders::advance_order))
				.route("/orders/{id}/retreat", post(orders::retreat_order))
				.route("/orders/{id}/stage", put(orders::set_order_stage))
				.route("/orders/{id}/priority", post(orders::toggle_order_priority))
				.route("/orders/{id}/refresh", post(orders::refresh_order)),
		)
		.layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
		.with_state(app_state);

	let bind_address = format!("{}:{}", server_config.host, server_config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("Backoffice API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}
