use serde::{Deserialize, Serialize};

use super::CartItem;

pub const ORDER_STATUS_CANCELLED: &str = "Cancelled";

/// A finalized purchase record embedded in an account's `Orders` array.
///
/// `OrderStatus` is a free string on the wire; the only transition any route
/// performs is setting it to `Cancelled`. `DeliveredDate` exists in stored
/// documents but no endpoint ever sets it. Dates are the formatted strings the
/// frontend sends.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Order {
    #[serde(rename = "OrderId", default)]
    pub order_id: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "TotalAmount", default)]
    pub total_amount: f64,
    #[serde(rename = "ProductData", default)]
    pub product_data: Vec<CartItem>,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone_number", default)]
    pub phone_number: String,
    #[serde(rename = "BaseAmount", default)]
    pub base_amount: f64,
    #[serde(rename = "CashHandlingCharge", default)]
    pub cash_handling_charge: f64,
    #[serde(rename = "DeliveryCharge", default)]
    pub delivery_charge: f64,
    #[serde(rename = "Tax", default)]
    pub tax: f64,
    #[serde(rename = "DeliveredDate", default)]
    pub delivered_date: String,
    #[serde(rename = "OrderedDate", default)]
    pub ordered_date: String,
    #[serde(rename = "CancelledDate", default)]
    pub cancelled_date: String,
    #[serde(rename = "OrderStatus", default)]
    pub order_status: String,
}
