//! Order entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a reorder request. Orders are created pending; no
/// transition endpoint exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
        }
    }

    pub fn from_str_lossy(s: &str) -> OrderStatus {
        match s {
            "completed" => OrderStatus::Completed,
            _ => OrderStatus::Pending,
        }
    }
}

/// A reorder request toward a supplier, often generated from a
/// low-stock recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
    pub order_date: NaiveDate,
    pub supplier: String,
    pub status: OrderStatus,
}

/// An order to create; status always starts out pending.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub supplier: String,
}

impl NewOrder {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}
