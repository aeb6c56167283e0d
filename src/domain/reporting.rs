//! Reporting: dashboard aggregation and reorder recommendations.
//!
//! The auto-order policy lives here rather than in the UI: a
//! recommendation carries the suggested quantity (the reorder gap) and
//! a suggested unit price at the standard supplier markdown.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::product::Product;
use crate::domain::DomainError;

/// Fraction of the retail unit price offered when auto-ordering.
const REORDER_PRICE_FACTOR: f64 = 0.8;

/// The four dashboard figures. Each is an independent read; no
/// cross-consistency between them is promised under concurrent writes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: i64,
    pub low_stock_items: i64,
    pub pending_orders: i64,
    /// Sum of sale totals over the trailing 30 days
    pub total_sales: f64,
}

/// A product at or below its reorder point, with the derived order
/// suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderRecommendation {
    #[serde(flatten)]
    pub product: Product,
    pub suggested_quantity: i32,
    pub suggested_unit_price: f64,
}

impl ReorderRecommendation {
    pub fn for_product(product: Product) -> Self {
        let suggested_quantity = product.reorder_gap();
        let suggested_unit_price = product.unit_price * REORDER_PRICE_FACTOR;

        Self {
            product,
            suggested_quantity,
            suggested_unit_price,
        }
    }
}

/// Read-only repository backing the dashboard and the reorder list
#[async_trait]
pub trait ReportingRepository: Send + Sync + Debug {
    /// Compute the four dashboard figures
    async fn dashboard(&self) -> Result<DashboardSummary, DomainError>;

    /// All products with current_stock <= reorder_point
    async fn low_stock_products(&self) -> Result<Vec<Product>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug, Default)]
    struct Inner {
        products: Vec<Product>,
        pending_orders: i64,
        total_sales: f64,
    }

    /// In-memory reporting repository for testing
    #[derive(Debug, Default, Clone)]
    pub struct MockReportingRepository {
        inner: Arc<RwLock<Inner>>,
    }

    impl MockReportingRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn add_product(&self, product: Product) {
            self.inner.write().await.products.push(product);
        }

        pub async fn set_pending_orders(&self, count: i64) {
            self.inner.write().await.pending_orders = count;
        }

        pub async fn set_total_sales(&self, total: f64) {
            self.inner.write().await.total_sales = total;
        }
    }

    #[async_trait]
    impl ReportingRepository for MockReportingRepository {
        async fn dashboard(&self) -> Result<DashboardSummary, DomainError> {
            let inner = self.inner.read().await;
            Ok(DashboardSummary {
                total_products: inner.products.len() as i64,
                low_stock_items: inner.products.iter().filter(|p| p.needs_reorder()).count()
                    as i64,
                pending_orders: inner.pending_orders,
                total_sales: inner.total_sales,
            })
        }

        async fn low_stock_products(&self) -> Result<Vec<Product>, DomainError> {
            let inner = self.inner.read().await;
            Ok(inner
                .products
                .iter()
                .filter(|p| p.needs_reorder())
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(stock: i32, reorder_point: i32, max_stock: i32, unit_price: f64) -> Product {
        Product {
            id: 1,
            name: "Ibuprofen 200mg".to_string(),
            category: "Analgesics".to_string(),
            current_stock: stock,
            reorder_point,
            max_stock,
            unit_price,
            supplier: "Acme Pharma".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_recommendation_policy() {
        let rec = ReorderRecommendation::for_product(product(4, 5, 50, 2.0));
        assert_eq!(rec.suggested_quantity, 46);
        assert!((rec.suggested_unit_price - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_recommendation_gap_never_negative() {
        let rec = ReorderRecommendation::for_product(product(60, 70, 50, 2.0));
        assert_eq!(rec.suggested_quantity, 0);
    }

    #[test]
    fn test_dashboard_summary_uses_camel_case_keys() {
        let summary = DashboardSummary {
            total_products: 12,
            low_stock_items: 3,
            pending_orders: 2,
            total_sales: 99.5,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalProducts"], 12);
        assert_eq!(json["lowStockItems"], 3);
        assert_eq!(json["pendingOrders"], 2);
        assert_eq!(json["totalSales"], 99.5);
    }

    #[test]
    fn test_recommendation_serializes_product_fields_inline() {
        let rec = ReorderRecommendation::for_product(product(4, 5, 50, 2.0));
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["name"], "Ibuprofen 200mg");
        assert_eq!(json["current_stock"], 4);
        assert_eq!(json["suggested_quantity"], 46);
    }
}
