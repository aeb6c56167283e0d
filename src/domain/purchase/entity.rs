//! Purchase entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a purchase at creation time.
///
/// Stock moves only for purchases created as `Completed`; there is no
/// transition endpoint, so a `Pending` purchase never affects stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    #[default]
    Pending,
    Completed,
}

impl PurchaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PurchaseStatus::Pending => "pending",
            PurchaseStatus::Completed => "completed",
        }
    }

    pub fn from_str_lossy(s: &str) -> PurchaseStatus {
        match s {
            "completed" => PurchaseStatus::Completed,
            _ => PurchaseStatus::Pending,
        }
    }
}

/// Recorded purchase with its joined product name.
#[derive(Debug, Clone, Serialize)]
pub struct Purchase {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
    pub purchase_date: NaiveDate,
    pub status: PurchaseStatus,
}

/// A purchase to record.
#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub status: PurchaseStatus,
}

impl NewPurchase {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(PurchaseStatus::from_str_lossy("completed"), PurchaseStatus::Completed);
        assert_eq!(PurchaseStatus::from_str_lossy("pending"), PurchaseStatus::Pending);
        assert_eq!(PurchaseStatus::from_str_lossy("???"), PurchaseStatus::Pending);
        assert_eq!(PurchaseStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(PurchaseStatus::default(), PurchaseStatus::Pending);
    }
}
