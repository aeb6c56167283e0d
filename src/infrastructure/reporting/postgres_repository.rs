//! PostgreSQL reporting repository
//!
//! The dashboard is four independent aggregate reads. They run outside
//! a transaction, so the figures may be mutually inconsistent under
//! concurrent writes.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::product::Product;
use crate::domain::reporting::{DashboardSummary, ReportingRepository};
use crate::domain::DomainError;
use crate::infrastructure::product::postgres_repository::row_to_product;

/// PostgreSQL implementation of `ReportingRepository`
#[derive(Debug, Clone)]
pub struct PostgresReportingRepository {
    pool: PgPool,
}

impl PostgresReportingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportingRepository for PostgresReportingRepository {
    async fn dashboard(&self) -> Result<DashboardSummary, DomainError> {
        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count products: {}", e)))?;

        let low_stock_items: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE current_stock <= reorder_point",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to count low stock products: {}", e)))?;

        let pending_orders: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to count pending orders: {}", e)))?;

        let total_sales: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total), 0) FROM sales \
             WHERE sale_date >= CURRENT_DATE - INTERVAL '30 days'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to sum recent sales: {}", e)))?;

        Ok(DashboardSummary {
            total_products,
            low_stock_items,
            pending_orders,
            total_sales,
        })
    }

    async fn low_stock_products(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, name, category, current_stock, reorder_point, max_stock, \
                    unit_price, supplier, created_at, updated_at \
             FROM products WHERE current_stock <= reorder_point ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list low stock products: {}", e)))?;

        Ok(rows.iter().map(row_to_product).collect())
    }
}
