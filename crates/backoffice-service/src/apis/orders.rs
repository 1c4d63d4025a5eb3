//! Order endpoints of the backoffice API.
//!
//! Handlers translate store results into HTTP responses. A failed mutation
//! leaves the store at its pre-mutation state, so the dashboard keeps
//! showing what was true before the attempt; the error body carries the
//! machine-readable code the frontend turns into a toast.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use backoffice_client::ApiError;
use backoffice_store::StoreError;
use backoffice_types::{ErrorResponse, OrderPageView, OrderView, PipelineStage, StageError};
use serde::Deserialize;
use tracing::warn;

use crate::server::AppState;

/// Error half of every handler result.
type ApiFailure = (StatusCode, Json<ErrorResponse>);

/// Query parameters for the paged order listing.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
	page: Option<u32>,
	#[serde(rename = "pageSize")]
	page_size: Option<u32>,
}

/// Body of the explicit stage update.
#[derive(Debug, Deserialize)]
pub struct SetStageRequest {
	stage: usize,
}

/// Handles GET /api/orders requests.
///
/// Loads the requested page into the store and returns it together with
/// the remote pagination metadata.
pub async fn list_orders(
	State(state): State<AppState>,
	Query(query): Query<PageQuery>,
) -> Result<Json<OrderPageView>, ApiFailure> {
	let page = query.page.unwrap_or(1);
	let page_size = query.page_size.unwrap_or(state.default_page_size);

	let loaded = state
		.store
		.load_page(page, page_size)
		.await
		.map_err(store_failure)?;

	Ok(Json(OrderPageView {
		orders: loaded.orders.iter().map(OrderView::from).collect(),
		total: loaded.total,
		has_next_page: loaded.has_next_page,
	}))
}

/// Handles GET /api/orders/prioritized requests.
pub async fn prioritized_orders(State(state): State<AppState>) -> Json<Vec<OrderView>> {
	let orders = state.store.prioritized().await;
	Json(orders.iter().map(OrderView::from).collect())
}

/// Handles GET /api/orders/{id} requests.
///
/// Serves the order from the local views; use the refresh endpoint to pull
/// a fresh copy from the remote system.
pub async fn get_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<OrderView>, ApiFailure> {
	match state.store.get(&id).await {
		Some(order) => Ok(Json(OrderView::from(&order))),
		None => Err(store_failure(StoreError::OrderNotFound(id))),
	}
}

/// Handles POST /api/orders/{id}/advance requests.
pub async fn advance_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiFailure> {
	state
		.store
		.advance_stage(&id)
		.await
		.map_err(store_failure)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Handles POST /api/orders/{id}/retreat requests.
pub async fn retreat_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiFailure> {
	state
		.store
		.retreat_stage(&id)
		.await
		.map_err(store_failure)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Handles PUT /api/orders/{id}/stage requests.
pub async fn set_order_stage(
	Path(id): Path<String>,
	State(state): State<AppState>,
	Json(request): Json<SetStageRequest>,
) -> Result<StatusCode, ApiFailure> {
	let target = PipelineStage::from_index(request.stage).map_err(stage_failure)?;
	state
		.store
		.set_stage(&id, target)
		.await
		.map_err(store_failure)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Handles POST /api/orders/{id}/priority requests.
pub async fn toggle_order_priority(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiFailure> {
	state
		.store
		.toggle_priority(&id)
		.await
		.map_err(store_failure)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Handles POST /api/orders/{id}/refresh requests.
pub async fn refresh_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<Json<OrderView>, ApiFailure> {
	let order = state.store.refresh_one(&id).await.map_err(store_failure)?;
	Ok(Json(OrderView::from(&order)))
}

/// Handles DELETE /api/orders/{id} requests.
pub async fn delete_order(
	Path(id): Path<String>,
	State(state): State<AppState>,
) -> Result<StatusCode, ApiFailure> {
	state
		.store
		.delete_order(&id)
		.await
		.map_err(store_failure)?;
	Ok(StatusCode::NO_CONTENT)
}

/// Maps a store error to the matching response.
fn store_failure(error: StoreError) -> ApiFailure {
	warn!("Order operation failed: {}", error);
	let (status, code) = match &error {
		StoreError::OrderNotFound(_) | StoreError::Api(ApiError::NotFound(_)) => {
			(StatusCode::NOT_FOUND, "ORDER_NOT_FOUND")
		},
		StoreError::Api(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
	};

	(
		status,
		Json(ErrorResponse {
			error: code.to_string(),
			message: error.to_string(),
			details: None,
		}),
	)
}

/// Maps an invalid stage index to a bad-request response.
fn stage_failure(error: StageError) -> ApiFailure {
	(
		StatusCode::BAD_REQUEST,
		Json(ErrorResponse {
			error: "INVALID_STAGE".to_string(),
			message: error.to_string(),
			details: None,
		}),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use backoffice_client::implementations::mock::MockOrdersApi;
	use backoffice_client::OrdersApiService;
	use backoffice_store::OrderStore;
	use backoffice_types::{CustomerRecord, OrderRecord, ProductRecord};
	use rust_decimal::Decimal;
	use std::sync::Arc;

	fn record(id: &str, status: &str) -> OrderRecord {
		OrderRecord {
			id: id.to_string(),
			status: status.to_string(),
			customer: CustomerRecord {
				id: format!("c-{}", id),
				name: "Erika Mustermann".to_string(),
				customer_number: "K-1001".to_string(),
			},
			product: ProductRecord {
				id: format!("p-{}", id),
				supply_description: "Sensomotorische Einlage".to_string(),
				price_insole: Decimal::new(8950, 2),
				price_service: Decimal::new(2500, 2),
			},
			pickup_location: "Filiale Mitte".to_string(),
			completion_date: None,
			delivery_date: None,
		}
	}

	async fn app_state(records: Vec<OrderRecord>) -> (MockOrdersApi, AppState) {
		let mock = MockOrdersApi::new();
		mock.seed(records).await;
		let store = OrderStore::new(OrdersApiService::new(Box::new(mock.clone())));
		(
			mock,
			AppState {
				store: Arc::new(store),
				default_page_size: 10,
			},
		)
	}

	#[tokio::test]
	async fn list_orders_serves_the_loaded_page() {
		let (_mock, state) = app_state(vec![
			record("o-1", "Einlage_vorbereiten"),
			record("o-2", "Ausgeführte_Einlagen"),
		])
		.await;

		let query = PageQuery {
			page: None,
			page_size: None,
		};
		let Json(page) = list_orders(State(state.clone()), Query(query)).await.unwrap();

		assert_eq!(page.orders.len(), 2);
		assert_eq!(page.total, 2);
		assert!(!page.has_next_page);
		assert_eq!(page.orders[0].status_label, "Einlage vorbereiten");

		let Json(prioritized) = prioritized_orders(State(state)).await;
		assert_eq!(prioritized.len(), 1);
		assert_eq!(prioritized[0].id, "o-1");
	}

	#[tokio::test]
	async fn unknown_order_maps_to_not_found() {
		let (_mock, state) = app_state(vec![]).await;

		let result = get_order(Path("ghost".to_string()), State(state)).await;
		let (status, Json(body)) = result.unwrap_err();
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body.error, "ORDER_NOT_FOUND");
	}

	#[tokio::test]
	async fn remote_failure_maps_to_bad_gateway() {
		let (mock, state) = app_state(vec![record("o-1", "Einlage_vorbereiten")]).await;
		let query = PageQuery {
			page: None,
			page_size: None,
		};
		list_orders(State(state.clone()), Query(query)).await.unwrap();
		mock.set_fail_updates(true).await;

		let result = advance_order(Path("o-1".to_string()), State(state)).await;
		let (status, Json(body)) = result.unwrap_err();
		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert_eq!(body.error, "UPSTREAM_ERROR");
	}

	#[tokio::test]
	async fn invalid_stage_index_maps_to_bad_request() {
		let (_mock, state) = app_state(vec![record("o-1", "Einlage_vorbereiten")]).await;
		let query = PageQuery {
			page: None,
			page_size: None,
		};
		list_orders(State(state.clone()), Query(query)).await.unwrap();

		let request = SetStageRequest { stage: 9 };
		let result = set_order_stage(Path("o-1".to_string()), State(state), Json(request)).await;
		let (status, Json(body)) = result.unwrap_err();
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body.error, "INVALID_STAGE");
	}

	#[tokio::test]
	async fn advance_endpoint_commits_and_returns_no_content() {
		let (mock, state) = app_state(vec![record("o-1", "Einlage_vorbereiten")]).await;
		let query = PageQuery {
			page: None,
			page_size: None,
		};
		list_orders(State(state.clone()), Query(query)).await.unwrap();

		let status = advance_order(Path("o-1".to_string()), State(state.clone()))
			.await
			.unwrap();
		assert_eq!(status, StatusCode::NO_CONTENT);
		assert_eq!(
			mock.status_of("o-1").await.unwrap(),
			"Einlage_in_Fertigung"
		);

		let Json(view) = get_order(Path("o-1".to_string()), State(state)).await.unwrap();
		assert_eq!(view.stage, 1);
	}
}
