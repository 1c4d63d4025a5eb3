//! In-memory mock implementation of the order API client.
//!
//! This module keeps the order table in memory behind a read-write lock,
//! useful for tests and local development where no remote order system is
//! available. Failures can be injected per operation, and every remote
//! call is counted so tests can assert exactly which round-trips happened.

use crate::{ApiError, OrdersApiInterface};
use async_trait::async_trait;
use backoffice_types::{
	is_prioritized_token, ConfigSchema, CustomerRecord, Field, FieldType, OrderPage, OrderRecord,
	PipelineStage, ProductRecord, Schema,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Mutable mock state shared by all clones of the client.
#[derive(Default)]
struct MockState {
	orders: Vec<OrderRecord>,
	fail_lists: bool,
	fail_gets: bool,
	fail_updates: bool,
	fail_deletes: bool,
	list_calls: usize,
	get_calls: usize,
	update_calls: usize,
	delete_calls: usize,
}

/// In-memory order API implementation.
///
/// Cloning shares the underlying state, so a test can keep a handle for
/// seeding and assertions while the store owns the boxed clone.
#[derive(Clone)]
pub struct MockOrdersApi {
	state: Arc<RwLock<MockState>>,
}

impl MockOrdersApi {
	/// Creates an empty mock.
	pub fn new() -> Self {
		Self {
			state: Arc::new(RwLock::new(MockState::default())),
		}
	}

	/// Replaces the order table.
	pub async fn seed(&self, orders: Vec<OrderRecord>) {
		self.state.write().await.orders = orders;
	}

	/// Makes subsequent list calls fail.
	pub async fn set_fail_lists(&self, fail: bool) {
		self.state.write().await.fail_lists = fail;
	}

	/// Makes subsequent single-order fetches fail.
	pub async fn set_fail_gets(&self, fail: bool) {
		self.state.write().await.fail_gets = fail;
	}

	/// Makes subsequent status updates fail.
	pub async fn set_fail_updates(&self, fail: bool) {
		self.state.write().await.fail_updates = fail;
	}

	/// Makes subsequent deletes fail.
	pub async fn set_fail_deletes(&self, fail: bool) {
		self.state.write().await.fail_deletes = fail;
	}

	/// Number of status-update calls received, including failed ones.
	pub async fn update_calls(&self) -> usize {
		self.state.read().await.update_calls
	}

	/// Number of delete calls received, including failed ones.
	pub async fn delete_calls(&self) -> usize {
		self.state.read().await.delete_calls
	}

	/// Number of list calls received, including failed ones.
	pub async fn list_calls(&self) -> usize {
		self.state.read().await.list_calls
	}

	/// The status token currently stored for an order.
	pub async fn status_of(&self, id: &str) -> Option<String> {
		self.state
			.read()
			.await
			.orders
			.iter()
			.find(|record| record.id == id)
			.map(|record| record.status.clone())
	}

	/// Builds a demo order record for local development seeding.
	pub fn demo_record(index: usize) -> OrderRecord {
		const NAMES: [(&str, &str); 4] = [
			("Erika Mustermann", "K-1001"),
			("Hans Beispiel", "K-1002"),
			("Mia Schröder", "K-1003"),
			("Jonas Weber", "K-1004"),
		];
		const SUPPLIES: [&str; 3] = [
			"Sensomotorische Einlage",
			"Weichschaum-Einlage",
			"Carbon-Sporteinlage",
		];

		let (name, number) = NAMES[index % NAMES.len()];
		let stage = PipelineStage::from_index(index % PipelineStage::COUNT)
			.expect("index is taken modulo the stage count");

		OrderRecord {
			id: Uuid::new_v4().to_string(),
			status: stage.token().to_string(),
			customer: CustomerRecord {
				id: Uuid::new_v4().to_string(),
				name: name.to_string(),
				customer_number: number.to_string(),
			},
			product: ProductRecord {
				id: Uuid::new_v4().to_string(),
				supply_description: SUPPLIES[index % SUPPLIES.len()].to_string(),
				price_insole: Decimal::new(8950, 2),
				price_service: Decimal::new(2500, 2),
			},
			pickup_location: if index % 2 == 0 {
				"Filiale Mitte".to_string()
			} else {
				"Filiale Nord".to_string()
			},
			completion_date: None,
			delivery_date: None,
		}
	}
}

impl Default for MockOrdersApi {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl OrdersApiInterface for MockOrdersApi {
	fn config_schema(&self) -> Box<dyn ConfigSchema> {
		Box::new(MockOrdersApiSchema)
	}

	async fn list_orders(
		&self,
		page: u32,
		page_size: u32,
		prioritized_only: Option<bool>,
	) -> Result<OrderPage, ApiError> {
		let mut state = self.state.write().await;
		state.list_calls += 1;
		if state.fail_lists {
			return Err(ApiError::Network("injected list failure".to_string()));
		}

		let filtered: Vec<&OrderRecord> = state
			.orders
			.iter()
			.filter(|record| match prioritized_only {
				Some(flag) => is_prioritized_token(&record.status) == flag,
				None => true,
			})
			.collect();

		let total = filtered.len() as u64;
		let start = (page.saturating_sub(1) as usize) * page_size as usize;
		let orders: Vec<OrderRecord> = filtered
			.into_iter()
			.skip(start)
			.take(page_size as usize)
			.cloned()
			.collect();
		let has_next_page = (start + orders.len()) < total as usize;

		Ok(OrderPage {
			orders,
			total,
			has_next_page,
		})
	}

	async fn get_order(&self, id: &str) -> Result<OrderRecord, ApiError> {
		let mut state = self.state.write().await;
		state.get_calls += 1;
		if state.fail_gets {
			return Err(ApiError::Network("injected get failure".to_string()));
		}

		state
			.orders
			.iter()
			.find(|record| record.id == id)
			.cloned()
			.ok_or_else(|| ApiError::NotFound(id.to_string()))
	}

	async fn update_order_status(&self, id: &str, status_token: &str) -> Result<(), ApiError> {
		let mut state = self.state.write().await;
		state.update_calls += 1;
		if state.fail_updates {
			return Err(ApiError::Network("injected update failure".to_string()));
		}

		// The remote system only accepts the canonical tokens, not legacy
		// synonyms. A token that does not map back to itself is rejected.
		let canonical = PipelineStage::lookup_token(status_token)
			.map(|stage| stage.token() == status_token)
			.unwrap_or(false);
		if !canonical {
			return Err(ApiError::Api {
				status: 422,
				message: format!("unknown status token '{}'", status_token),
			});
		}

		let record = state
			.orders
			.iter_mut()
			.find(|record| record.id == id)
			.ok_or_else(|| ApiError::NotFound(id.to_string()))?;
		record.status = status_token.to_string();
		Ok(())
	}

	async fn delete_order(&self, id: &str) -> Result<(), ApiError> {
		let mut state = self.state.write().await;
		state.delete_calls += 1;
		if state.fail_deletes {
			return Err(ApiError::Network("injected delete failure".to_string()));
		}

		let before = state.orders.len();
		state.orders.retain(|record| record.id != id);
		if state.orders.len() == before {
			return Err(ApiError::NotFound(id.to_string()));
		}
		Ok(())
	}
}

/// Configuration schema for MockOrdersApi.
pub struct MockOrdersApiSchema;

impl ConfigSchema for MockOrdersApiSchema {
	fn validate(&self, config: &toml::Value) -> Result<(), backoffice_types::ValidationError> {
		let schema = Schema::new(
			vec![],
			vec![Field::new(
				"seed_orders",
				FieldType::Integer {
					min: Some(0),
					max: Some(1000),
				},
			)],
		);
		schema.validate(config)
	}
}

/// Factory function to create a mock order API client from configuration.
///
/// Configuration parameters:
/// - `seed_orders`: Number of demo orders to pre-populate (default: 0)
pub fn create_api(config: &toml::Value) -> Result<Box<dyn OrdersApiInterface>, ApiError> {
	MockOrdersApiSchema
		.validate(config)
		.map_err(|e| ApiError::Config(e.to_string()))?;

	let seed_orders = config
		.get("seed_orders")
		.and_then(|v| v.as_integer())
		.unwrap_or(0) as usize;

	let orders = (0..seed_orders).map(MockOrdersApi::demo_record).collect();
	let api = MockOrdersApi {
		state: Arc::new(RwLock::new(MockState {
			orders,
			..MockState::default()
		})),
	};
	Ok(Box::new(api))
}
