//! Order entity types.
//!
//! This module defines the in-memory order entity held by the pipeline
//! store. The entity denormalizes the customer and product sub-objects of
//! the wire format and carries the derived stage fields alongside the raw
//! remote status token.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::OrderRecord;
use crate::stage::{display_label_for_token, is_prioritized_token, PipelineStage};

/// A customer order for one pair of insoles.
///
/// `stage` and `prioritized` are derived from `status_token` and are only
/// ever rewritten together through [`Order::apply_token`], so the three
/// fields cannot drift apart. The raw token is preserved verbatim for
/// status-bearing display, including legacy and unknown tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
	/// Server-assigned identifier, stable for the order's lifetime.
	pub id: String,
	/// Customer display name, denormalized from the linked customer record.
	pub customer_name: String,
	/// Customer number, denormalized from the linked customer record.
	pub customer_number: String,
	/// Position in the fulfillment pipeline.
	pub stage: PipelineStage,
	/// The remote API's status string, preserved verbatim.
	pub status_token: String,
	/// Whether the order belongs to the prioritized work queue.
	pub prioritized: bool,
	/// Charge for the insole itself.
	pub price_insole: Decimal,
	/// Charge for fitting and adjustment work.
	pub price_service: Decimal,
	/// Description of the prescribed supply.
	pub supply_description: String,
	/// Where the customer picks the order up.
	pub pickup_location: String,
	/// Planned completion date, opaque to this system.
	pub completion_date: Option<String>,
	/// Delivery date, opaque to this system.
	pub delivery_date: Option<String>,
}

impl Order {
	/// The German display label for the order's current status.
	///
	/// Unknown tokens are shown as-is.
	pub fn display_label(&self) -> &str {
		display_label_for_token(&self.status_token)
	}

	/// Sum of the two component charges.
	pub fn total_price(&self) -> Decimal {
		self.price_insole + self.price_service
	}

	/// Replaces the status token and re-derives stage and priority.
	pub fn apply_token(&mut self, token: &str) {
		self.stage = PipelineStage::from_token(token);
		self.prioritized = is_prioritized_token(token);
		self.status_token = token.to_string();
	}

	/// Moves the order to `stage`, rewriting the token to the canonical one.
	pub fn apply_stage(&mut self, stage: PipelineStage) {
		self.apply_token(stage.token());
	}
}

impl From<OrderRecord> for Order {
	fn from(record: OrderRecord) -> Self {
		let stage = PipelineStage::from_token(&record.status);
		let prioritized = is_prioritized_token(&record.status);
		Self {
			id: record.id,
			customer_name: record.customer.name,
			customer_number: record.customer.customer_number,
			stage,
			status_token: record.status,
			prioritized,
			price_insole: record.product.price_insole,
			price_service: record.product.price_service,
			supply_description: record.product.supply_description,
			pickup_location: record.pickup_location,
			completion_date: record.completion_date,
			delivery_date: record.delivery_date,
		}
	}
}
