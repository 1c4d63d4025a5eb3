//! Wire-format records and HTTP API DTOs.
//!
//! The `*Record` types mirror the JSON the remote order API produces and
//! consumes (camelCase field names). The `*View` types are what the
//! backoffice HTTP API serves to the dashboard frontend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Customer sub-object of a raw order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
	/// Remote customer identifier.
	pub id: String,
	/// Customer display name.
	pub name: String,
	/// Workshop-internal customer number.
	#[serde(rename = "customerNumber")]
	pub customer_number: String,
}

/// Product sub-object of a raw order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
	/// Remote product identifier.
	pub id: String,
	/// Description of the prescribed supply.
	#[serde(rename = "supplyDescription")]
	pub supply_description: String,
	/// Charge for the insole itself.
	#[serde(rename = "priceInsole")]
	pub price_insole: Decimal,
	/// Charge for fitting and adjustment work.
	#[serde(rename = "priceService")]
	pub price_service: Decimal,
}

/// Raw order record as returned by the remote order API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
	/// Remote order identifier.
	pub id: String,
	/// Raw status token; may be a legacy synonym or an unknown value.
	pub status: String,
	/// Linked customer record.
	pub customer: CustomerRecord,
	/// Linked product record.
	pub product: ProductRecord,
	/// Where the customer picks the order up.
	#[serde(rename = "pickupLocation", default)]
	pub pickup_location: String,
	/// Planned completion date.
	#[serde(rename = "completionDate", skip_serializing_if = "Option::is_none", default)]
	pub completion_date: Option<String>,
	/// Delivery date.
	#[serde(rename = "deliveryDate", skip_serializing_if = "Option::is_none", default)]
	pub delivery_date: Option<String>,
}

/// One page of raw order records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPage {
	/// The records of this page, in remote fetch order.
	pub orders: Vec<OrderRecord>,
	/// Total number of orders matching the query.
	pub total: u64,
	/// Whether another page follows this one.
	#[serde(rename = "hasNextPage")]
	pub has_next_page: bool,
}

/// Order response for the backoffice API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
	/// Unique identifier for this order.
	pub id: String,
	/// Customer display name.
	#[serde(rename = "customerName")]
	pub customer_name: String,
	/// Workshop-internal customer number.
	#[serde(rename = "customerNumber")]
	pub customer_number: String,
	/// Pipeline stage index.
	pub stage: usize,
	/// Raw status token, verbatim.
	pub status: String,
	/// German display label for the status.
	#[serde(rename = "statusLabel")]
	pub status_label: String,
	/// Whether the order is in the prioritized work queue.
	pub prioritized: bool,
	/// Sum of the component charges.
	#[serde(rename = "totalPrice")]
	pub total_price: Decimal,
	/// Description of the prescribed supply.
	#[serde(rename = "supplyDescription")]
	pub supply_description: String,
	/// Where the customer picks the order up.
	#[serde(rename = "pickupLocation")]
	pub pickup_location: String,
	/// Planned completion date.
	#[serde(rename = "completionDate")]
	pub completion_date: Option<String>,
	/// Delivery date.
	#[serde(rename = "deliveryDate")]
	pub delivery_date: Option<String>,
}

impl From<&Order> for OrderView {
	fn from(order: &Order) -> Self {
		Self {
			id: order.id.clone(),
			customer_name: order.customer_name.clone(),
			customer_number: order.customer_number.clone(),
			stage: order.stage.index(),
			status: order.status_token.clone(),
			status_label: order.display_label().to_string(),
			prioritized: order.prioritized,
			total_price: order.total_price(),
			supply_description: order.supply_description.clone(),
			pickup_location: order.pickup_location.clone(),
			completion_date: order.completion_date.clone(),
			delivery_date: order.delivery_date.clone(),
		}
	}
}

/// Paged order response for the backoffice API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPageView {
	/// The orders of the requested page.
	pub orders: Vec<OrderView>,
	/// Total number of orders known to the remote system.
	pub total: u64,
	/// Whether another page follows this one.
	#[serde(rename = "hasNextPage")]
	pub has_next_page: bool,
}

/// Error body served by the backoffice API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Machine-readable error code.
	pub error: String,
	/// Human-readable message.
	pub message: String,
	/// Optional structured detail.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}
