//! Sale entity

use chrono::NaiveDate;
use serde::Serialize;

/// Recorded sale, including the joined product and salesperson names
/// used by listings.
#[derive(Debug, Clone, Serialize)]
pub struct Sale {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
    pub salesperson_id: i64,
    pub salesperson_name: String,
    pub sale_date: NaiveDate,
}

/// A sale to record. The salesperson id always comes from the
/// authenticated caller, never from client input.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub salesperson_id: i64,
}

impl NewSale {
    /// Line total, computed server-side.
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_quantity_times_unit_price() {
        let sale = NewSale {
            product_id: 1,
            quantity: 3,
            unit_price: 2.0,
            salesperson_id: 7,
        };
        assert_eq!(sale.total(), 6.0);
    }
}
