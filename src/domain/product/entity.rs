//! Product entity

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stocked product with its restock band.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub current_stock: i32,
    /// Stock level at or below which the product is flagged for reorder
    pub reorder_point: i32,
    /// Upper bound of the restock band
    pub max_stock: i32,
    pub unit_price: f64,
    pub supplier: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product sits at or below its reorder point.
    pub fn needs_reorder(&self) -> bool {
        self.current_stock <= self.reorder_point
    }

    /// Units needed to refill up to `max_stock`, never negative.
    pub fn reorder_gap(&self) -> i32 {
        (self.max_stock - self.current_stock).max(0)
    }
}

/// Product fields supplied by the caller; used for both insert and
/// full-row update.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub current_stock: i32,
    pub reorder_point: i32,
    pub max_stock: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_product(id: i64, stock: i32, reorder_point: i32, max_stock: i32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            category: "Analgesics".to_string(),
            current_stock: stock,
            reorder_point,
            max_stock,
            unit_price: 2.0,
            supplier: "Acme Pharma".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_needs_reorder_at_or_below_point() {
        assert!(sample_product(1, 5, 5, 50).needs_reorder());
        assert!(sample_product(1, 4, 5, 50).needs_reorder());
        assert!(!sample_product(1, 6, 5, 50).needs_reorder());
    }

    #[test]
    fn test_reorder_gap() {
        assert_eq!(sample_product(1, 10, 5, 50).reorder_gap(), 40);
        assert_eq!(sample_product(1, 50, 5, 50).reorder_gap(), 0);
        // Overstocked products never report a negative gap
        assert_eq!(sample_product(1, 60, 5, 50).reorder_gap(), 0);
    }
}
