//! The order store and its pipeline operations.
//!
//! State is held as one entity arena (order id to order) plus two index
//! views over it: the ids of the most recently fetched page, and the ids of
//! the prioritized set. Both views always resolve through the arena, so an
//! order can never diverge between them. Mutations take the lock twice at
//! most, once to read the pre-mutation state and once to commit; the lock
//! is never held across a remote call. Concurrent mutations against the
//! same order are not serialized: both read the same pre-mutation stage.

use crate::StoreError;
use backoffice_client::OrdersApiService;
use backoffice_types::{Order, PipelineStage};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Page size used when scanning for prioritized orders at startup.
const SCAN_PAGE_SIZE: u32 = 50;

/// The two index views over the entity arena.
#[derive(Default)]
struct StoreState {
	/// Entity arena, keyed by order id.
	orders: HashMap<String, Order>,
	/// Ids of the current page, in remote fetch order.
	page_ids: Vec<String>,
	/// Ids of the prioritized set, accumulated across pages.
	prioritized_ids: HashSet<String>,
}

/// One loaded page of orders plus the remote pagination metadata.
#[derive(Debug, Clone)]
pub struct PageView {
	/// The orders of the page, in remote fetch order.
	pub orders: Vec<Order>,
	/// Total number of orders known to the remote system.
	pub total: u64,
	/// Whether another page follows this one.
	pub has_next_page: bool,
}

/// In-memory store of the order pipeline, synchronized against the remote
/// order API.
pub struct OrderStore {
	/// The remote API seam.
	api: OrdersApiService,
	/// The order state both views are derived from.
	state: RwLock<StoreState>,
}

impl OrderStore {
	/// Creates an empty store over the given API client.
	pub fn new(api: OrdersApiService) -> Self {
		Self {
			api,
			state: RwLock::new(StoreState::default()),
		}
	}

	/// Fetches one page and replaces the current-page view with it.
	///
	/// The prioritized set is merged, not replaced: orders of this page are
	/// added or removed according to the priority predicate, while
	/// prioritized orders belonging to other pages stay untouched. When the
	/// remote call fails, no local state changes.
	pub async fn load_page(&self, page: u32, page_size: u32) -> Result<PageView, StoreError> {
		let fetched = self.api.list_orders(page, page_size, None).await?;
		let orders: Vec<Order> = fetched.orders.into_iter().map(Order::from).collect();

		let mut state = self.state.write().await;

		// Drop arena entries only the old page view kept alive.
		let old_page = std::mem::take(&mut state.page_ids);
		for id in old_page {
			if !state.prioritized_ids.contains(&id) {
				state.orders.remove(&id);
			}
		}

		for order in &orders {
			state.page_ids.push(order.id.clone());
			if order.prioritized {
				state.prioritized_ids.insert(order.id.clone());
			} else {
				state.prioritized_ids.remove(&order.id);
			}
			state.orders.insert(order.id.clone(), order.clone());
		}

		tracing::debug!(page, count = orders.len(), "Loaded order page");

		Ok(PageView {
			orders,
			total: fetched.total,
			has_next_page: fetched.has_next_page,
		})
	}

	/// Seeds the prioritized set by scanning up to `max_pages` pages.
	///
	/// The scan stops early once the remote system reports no further
	/// pages. It is a best-effort, bounded walk: with a deep order history
	/// the tail beyond the bound is not searched. Nothing is committed
	/// unless the whole scan succeeds.
	pub async fn load_all_prioritized(&self, max_pages: u32) -> Result<Vec<Order>, StoreError> {
		if max_pages == 0 {
			return Ok(Vec::new());
		}

		let mut collected: Vec<Order> = Vec::new();
		let mut page = 1;
		loop {
			let fetched = self.api.list_orders(page, SCAN_PAGE_SIZE, None).await?;
			let more = fetched.has_next_page;
			for record in fetched.orders {
				let order = Order::from(record);
				if order.prioritized {
					collected.push(order);
				}
			}
			if !more {
				break;
			}
			if page >= max_pages {
				tracing::debug!(scanned = page, "Priority scan stopped at the page bound");
				break;
			}
			page += 1;
		}

		let mut state = self.state.write().await;
		for order in &collected {
			state.prioritized_ids.insert(order.id.clone());
			state.orders.insert(order.id.clone(), order.clone());
		}

		tracing::info!(count = collected.len(), "Seeded prioritized order set");
		Ok(collected)
	}

	/// Moves an order one stage forward.
	///
	/// A no-op at the final stage; no remote call is made then.
	pub async fn advance_stage(&self, order_id: &str) -> Result<(), StoreError> {
		let current = self.stage_of(order_id).await?;
		let Some(target) = current.next() else {
			tracing::debug!(order = order_id, "Order already at the final stage");
			return Ok(());
		};
		self.commit_stage(order_id, target).await
	}

	/// Moves an order one stage back.
	///
	/// A no-op at the first stage; no remote call is made then.
	pub async fn retreat_stage(&self, order_id: &str) -> Result<(), StoreError> {
		let current = self.stage_of(order_id).await?;
		let Some(target) = current.previous() else {
			tracing::debug!(order = order_id, "Order already at the first stage");
			return Ok(());
		};
		self.commit_stage(order_id, target).await
	}

	/// Moves an order directly to `target`, skipping intermediate stages.
	///
	/// Still a single remote round-trip with the same confirm-then-commit
	/// discipline as the single-step operations.
	pub async fn set_stage(&self, order_id: &str, target: PipelineStage) -> Result<(), StoreError> {
		self.stage_of(order_id).await?;
		self.commit_stage(order_id, target).await
	}

	/// Flips an order's membership in the prioritized set.
	///
	/// Turning priority ON resets the order to the first stage, confirmed
	/// remotely before the local commit. Turning it OFF is a local-only
	/// override: the order leaves the prioritized view without any remote
	/// call and without touching its stage, so the removal does not survive
	/// a reload of the order's page.
	pub async fn toggle_priority(&self, order_id: &str) -> Result<(), StoreError> {
		let (in_set, stage) = {
			let state = self.state.read().await;
			let order = state
				.orders
				.get(order_id)
				.ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;
			(state.prioritized_ids.contains(order_id), order.stage)
		};

		if in_set {
			let mut state = self.state.write().await;
			state.prioritized_ids.remove(order_id);
			if let Some(order) = state.orders.get_mut(order_id) {
				order.prioritized = false;
			}
			tracing::debug!(order = order_id, "Removed order from the prioritized set");
			return Ok(());
		}

		let first = PipelineStage::Preparation;
		if stage != first {
			self.api
				.update_order_status(order_id, first.token())
				.await
				.map_err(|e| {
					tracing::warn!(order = order_id, error = %e, "Priority reset rejected by the remote API");
					e
				})?;
		}

		let mut state = self.state.write().await;
		let order = state
			.orders
			.get_mut(order_id)
			.ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;
		if stage != first {
			order.apply_stage(first);
		} else {
			order.prioritized = true;
		}
		state.prioritized_ids.insert(order_id.to_string());
		tracing::debug!(order = order_id, "Added order to the prioritized set");
		Ok(())
	}

	/// Deletes an order remotely, then drops it from both views.
	///
	/// The local removal happens only after the remote delete succeeded, so
	/// a failed delete cannot resurrect the order on the next page load.
	pub async fn delete_order(&self, order_id: &str) -> Result<(), StoreError> {
		self.stage_of(order_id).await?;

		self.api.delete_order(order_id).await.map_err(|e| {
			tracing::warn!(order = order_id, error = %e, "Delete rejected by the remote API");
			e
		})?;

		let mut state = self.state.write().await;
		state.orders.remove(order_id);
		state.page_ids.retain(|id| id != order_id);
		state.prioritized_ids.remove(order_id);
		tracing::info!(order = order_id, "Deleted order");
		Ok(())
	}

	/// Re-fetches one order and overwrites its local copy.
	///
	/// Derived fields are recomputed from the fresh record, and the
	/// prioritized-set membership is fixed up in both directions.
	pub async fn refresh_one(&self, order_id: &str) -> Result<Order, StoreError> {
		let record = self.api.get_order(order_id).await?;
		let order = Order::from(record);

		let mut state = self.state.write().await;
		if order.prioritized {
			state.prioritized_ids.insert(order.id.clone());
		} else {
			state.prioritized_ids.remove(&order.id);
		}

		let reachable = state.page_ids.iter().any(|id| id == &order.id)
			|| state.prioritized_ids.contains(&order.id);
		if reachable {
			state.orders.insert(order.id.clone(), order.clone());
		} else {
			state.orders.remove(&order.id);
		}

		Ok(order)
	}

	/// The orders of the current page, in fetch order.
	pub async fn current_page(&self) -> Vec<Order> {
		let state = self.state.read().await;
		state
			.page_ids
			.iter()
			.filter_map(|id| state.orders.get(id).cloned())
			.collect()
	}

	/// The prioritized orders, sorted by id for stable display.
	pub async fn prioritized(&self) -> Vec<Order> {
		let state = self.state.read().await;
		let mut orders: Vec<Order> = state
			.prioritized_ids
			.iter()
			.filter_map(|id| state.orders.get(id).cloned())
			.collect();
		orders.sort_by(|a, b| a.id.cmp(&b.id));
		orders
	}

	/// Looks up one order in the arena.
	pub async fn get(&self, order_id: &str) -> Option<Order> {
		self.state.read().await.orders.get(order_id).cloned()
	}

	/// The order's current stage, or `OrderNotFound`.
	async fn stage_of(&self, order_id: &str) -> Result<PipelineStage, StoreError> {
		let state = self.state.read().await;
		state
			.orders
			.get(order_id)
			.map(|order| order.stage)
			.ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))
	}

	/// Confirms `target` with the remote API, then commits it locally.
	async fn commit_stage(&self, order_id: &str, target: PipelineStage) -> Result<(), StoreError> {
		self.api
			.update_order_status(order_id, target.token())
			.await
			.map_err(|e| {
				tracing::warn!(order = order_id, error = %e, "Status update rejected by the remote API");
				e
			})?;

		let mut state = self.state.write().await;
		let order = state
			.orders
			.get_mut(order_id)
			.ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;
		order.apply_stage(target);
		let prioritized = order.prioritized;

		if prioritized {
			state.prioritized_ids.insert(order_id.to_string());
		} else {
			state.prioritized_ids.remove(order_id);
		}
		tracing::debug!(order = order_id, stage = target.index(), "Committed stage change");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use backoffice_client::implementations::mock::MockOrdersApi;
	use backoffice_client::{ApiError, OrdersApiInterface, OrdersApiService};
	use backoffice_types::{CustomerRecord, OrderRecord, ProductRecord};
	use rust_decimal::Decimal;

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

	async fn store_with(records: Vec<OrderRecord>) -> (MockOrdersApi, OrderStore) {
		let mock = MockOrdersApi::new();
		mock.seed(records).await;
		let store = OrderStore::new(OrdersApiService::new(Box::new(mock.clone())));
		(mock, store)
	}

	#[tokio::test]
	async fn load_page_seeds_prioritized_from_the_page() {
		let mut records: Vec<OrderRecord> = (0..7)
			.map(|i| record(&format!("done-{}", i), "Ausgeführte_Einlagen"))
			.collect();
		records.push(record("a-1", "Einlage_vorbereiten"));
		records.push(record("a-2", "Einlage_verpacken"));
		records.push(record("a-3", "Einlage_versandt"));

		let (_mock, store) = store_with(records).await;
		let page = store.load_page(1, 10).await.unwrap();

		assert_eq!(page.orders.len(), 10);
		assert_eq!(page.total, 10);
		let prioritized = store.prioritized().await;
		assert_eq!(prioritized.len(), 3);
		assert!(prioritized.iter().all(|order| order.prioritized));
	}

	#[tokio::test]
	async fn load_page_failure_leaves_last_known_good_state() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();

		mock.set_fail_lists(true).await;
		let result = store.load_page(2, 10).await;
		assert!(matches!(result, Err(StoreError::Api(ApiError::Network(_)))));

		let page = store.current_page().await;
		assert_eq!(page.len(), 1);
		assert_eq!(page[0].id, "o-1");
	}

	#[tokio::test]
	async fn advance_at_final_stage_is_a_noop_without_remote_call() {
		let (mock, store) = store_with(vec![record("o-1", "Ausgeführte_Einlagen")]).await;
		store.load_page(1, 10).await.unwrap();

		store.advance_stage("o-1").await.unwrap();

		assert_eq!(mock.update_calls().await, 0);
		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Completed);
		assert_eq!(order.status_token, "Ausgeführte_Einlagen");
		assert_eq!(order.display_label(), "Ausgeführte Einlagen");
	}

	#[tokio::test]
	async fn retreat_at_first_stage_is_a_noop_without_remote_call() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();

		store.retreat_stage("o-1").await.unwrap();

		assert_eq!(mock.update_calls().await, 0);
		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Preparation);
	}

	#[tokio::test]
	async fn advance_commits_the_next_stage_after_confirmation() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_in_Fertigung")]).await;
		store.load_page(1, 10).await.unwrap();

		store.advance_stage("o-1").await.unwrap();

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Packaging);
		assert_eq!(order.status_token, "Einlage_verpacken");
		assert_eq!(order.display_label(), "Einlage verpacken");
		assert!(order.prioritized);
		// The remote system saw the same token.
		assert_eq!(mock.status_of("o-1").await.unwrap(), "Einlage_verpacken");
	}

	#[tokio::test]
	async fn advance_into_final_stage_leaves_the_prioritized_set() {
		let (_mock, store) = store_with(vec![record("o-1", "Einlage_versandt")]).await;
		store.load_page(1, 10).await.unwrap();
		assert_eq!(store.prioritized().await.len(), 1);

		store.advance_stage("o-1").await.unwrap();

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Completed);
		assert!(!order.prioritized);
		assert!(store.prioritized().await.is_empty());
	}

	#[tokio::test]
	async fn advance_failure_leaves_local_state_untouched() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_in_Fertigung")]).await;
		store.load_page(1, 10).await.unwrap();
		mock.set_fail_updates(true).await;

		let result = store.advance_stage("o-1").await;
		assert!(matches!(result, Err(StoreError::Api(_))));

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Production);
		assert_eq!(order.status_token, "Einlage_in_Fertigung");
		assert_eq!(order.display_label(), "Einlage in Fertigung");
	}

	#[tokio::test]
	async fn retreat_commits_the_previous_stage() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_Abholbereit")]).await;
		store.load_page(1, 10).await.unwrap();

		store.retreat_stage("o-1").await.unwrap();

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Packaging);
		assert_eq!(mock.status_of("o-1").await.unwrap(), "Einlage_verpacken");
	}

	#[tokio::test]
	async fn set_stage_jumps_in_one_round_trip() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();

		store
			.set_stage("o-1", PipelineStage::ReadyForPickup)
			.await
			.unwrap();

		assert_eq!(mock.update_calls().await, 1);
		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::ReadyForPickup);
	}

	#[tokio::test]
	async fn priority_off_is_local_only() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_Abholbereit")]).await;
		store.load_page(1, 10).await.unwrap();
		assert_eq!(store.prioritized().await.len(), 1);

		store.toggle_priority("o-1").await.unwrap();

		assert_eq!(mock.update_calls().await, 0);
		assert!(store.prioritized().await.is_empty());
		// The current-page view keeps the order with stage and token intact.
		let page = store.current_page().await;
		assert_eq!(page.len(), 1);
		assert_eq!(page[0].stage, PipelineStage::ReadyForPickup);
		assert_eq!(page[0].status_token, "Einlage_Abholbereit");
	}

	#[tokio::test]
	async fn priority_on_resets_to_the_first_stage() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_Abholbereit")]).await;
		store.load_page(1, 10).await.unwrap();

		// Leave the set locally, then rejoin it.
		store.toggle_priority("o-1").await.unwrap();
		store.toggle_priority("o-1").await.unwrap();

		assert_eq!(mock.update_calls().await, 1);
		assert_eq!(mock.status_of("o-1").await.unwrap(), "Einlage_vorbereiten");

		let prioritized = store.prioritized().await;
		assert_eq!(prioritized.len(), 1);
		assert_eq!(prioritized[0].stage, PipelineStage::Preparation);
	}

	#[tokio::test]
	async fn priority_on_at_first_stage_needs_no_remote_call() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();

		store.toggle_priority("o-1").await.unwrap();
		store.toggle_priority("o-1").await.unwrap();

		assert_eq!(mock.update_calls().await, 0);
		assert_eq!(store.prioritized().await.len(), 1);
	}

	#[tokio::test]
	async fn delete_removes_from_both_views_after_confirmation() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();

		store.delete_order("o-1").await.unwrap();

		assert_eq!(mock.delete_calls().await, 1);
		assert!(store.current_page().await.is_empty());
		assert!(store.prioritized().await.is_empty());
		assert!(store.get("o-1").await.is_none());
	}

	#[tokio::test]
	async fn failed_delete_keeps_the_order_in_both_views() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_vorbereiten")]).await;
		store.load_page(1, 10).await.unwrap();
		mock.set_fail_deletes(true).await;

		let result = store.delete_order("o-1").await;
		assert!(matches!(result, Err(StoreError::Api(_))));

		assert_eq!(store.current_page().await.len(), 1);
		assert_eq!(store.prioritized().await.len(), 1);
	}

	#[tokio::test]
	async fn legacy_typo_token_is_workable() {
		let (_mock, store) = store_with(vec![record("o-1", "Sarted")]).await;
		store.load_page(1, 10).await.unwrap();

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Preparation);
		assert_eq!(order.display_label(), "Einlage vorbereiten");
		assert!(order.prioritized);
		assert_eq!(store.prioritized().await.len(), 1);
	}

	#[tokio::test]
	async fn priority_scan_stops_when_pages_run_out() {
		let mut records = Vec::new();
		for i in 0..30 {
			records.push(record(&format!("a-{:02}", i), "Einlage_in_Fertigung"));
		}
		for i in 0..30 {
			records.push(record(&format!("d-{:02}", i), "Ausgeführte_Einlagen"));
		}
		let (mock, store) = store_with(records).await;

		let seeded = store.load_all_prioritized(5).await.unwrap();

		assert_eq!(seeded.len(), 30);
		// 60 orders at a scan size of 50 means exactly two list calls.
		assert_eq!(mock.list_calls().await, 2);
		assert_eq!(store.prioritized().await.len(), 30);
	}

	#[tokio::test]
	async fn priority_scan_respects_the_page_bound() {
		let records = (0..120)
			.map(|i| record(&format!("a-{:03}", i), "Einlage_vorbereiten"))
			.collect();
		let (mock, store) = store_with(records).await;

		let seeded = store.load_all_prioritized(1).await.unwrap();

		assert_eq!(seeded.len(), 50);
		assert_eq!(mock.list_calls().await, 1);
	}

	#[tokio::test]
	async fn refresh_rederives_and_fixes_membership() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_in_Fertigung")]).await;
		store.load_page(1, 10).await.unwrap();
		assert_eq!(store.prioritized().await.len(), 1);

		// The remote side finished the order behind our back.
		mock.update_order_status("o-1", "Ausgeführte_Einlagen")
			.await
			.unwrap();
		let refreshed = store.refresh_one("o-1").await.unwrap();

		assert_eq!(refreshed.stage, PipelineStage::Completed);
		assert!(store.prioritized().await.is_empty());
		let page = store.current_page().await;
		assert_eq!(page[0].stage, PipelineStage::Completed);

		// And back again: a reopened order rejoins the prioritized set.
		mock.update_order_status("o-1", "Einlage_verpacken")
			.await
			.unwrap();
		store.refresh_one("o-1").await.unwrap();
		assert_eq!(store.prioritized().await.len(), 1);
	}

	#[tokio::test]
	async fn refresh_failure_leaves_local_state_untouched() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_in_Fertigung")]).await;
		store.load_page(1, 10).await.unwrap();
		mock.set_fail_gets(true).await;

		let result = store.refresh_one("o-1").await;
		assert!(matches!(result, Err(StoreError::Api(_))));

		let order = store.get("o-1").await.unwrap();
		assert_eq!(order.stage, PipelineStage::Production);
		assert_eq!(store.prioritized().await.len(), 1);
	}

	#[tokio::test]
	async fn loading_another_page_keeps_foreign_prioritized_orders() {
		let mut records = Vec::new();
		for i in 0..10 {
			records.push(record(&format!("p1-{:02}", i), "Einlage_in_Fertigung"));
		}
		for i in 0..5 {
			records.push(record(&format!("p2-a{:02}", i), "Einlage_verpacken"));
		}
		for i in 0..5 {
			records.push(record(&format!("p2-d{:02}", i), "Ausgeführte_Einlagen"));
		}
		let (_mock, store) = store_with(records).await;

		store.load_page(1, 10).await.unwrap();
		assert_eq!(store.prioritized().await.len(), 10);

		store.load_page(2, 10).await.unwrap();

		// Page 1's prioritized orders survive, page 2 contributes its five.
		assert_eq!(store.prioritized().await.len(), 15);
		assert_eq!(store.current_page().await.len(), 10);
	}

	#[tokio::test]
	async fn reloading_a_page_drops_no_longer_prioritized_members() {
		let (mock, store) = store_with(vec![record("o-1", "Einlage_in_Fertigung")]).await;
		store.load_page(1, 10).await.unwrap();
		assert_eq!(store.prioritized().await.len(), 1);

		mock.update_order_status("o-1", "Ausgeführte_Einlagen")
			.await
			.unwrap();
		store.load_page(1, 10).await.unwrap();

		assert!(store.prioritized().await.is_empty());
	}

	#[tokio::test]
	async fn mutations_on_unknown_orders_fail_without_remote_calls() {
		let (mock, store) = store_with(vec![]).await;

		let result = store.advance_stage("ghost").await;
		assert!(matches!(result, Err(StoreError::OrderNotFound(_))));
		let result = store.delete_order("ghost").await;
		assert!(matches!(result, Err(StoreError::OrderNotFound(_))));
		let result = store.toggle_priority("ghost").await;
		assert!(matches!(result, Err(StoreError::OrderNotFound(_))));

		assert_eq!(mock.update_calls().await, 0);
		assert_eq!(mock.delete_calls().await, 0);
	}
}
