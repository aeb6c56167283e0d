//! PostgreSQL purchase repository
//!
//! Same transaction shape as the sale path with the opposite sign:
//! the insert and the conditional stock increment commit together.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domain::purchase::{NewPurchase, Purchase, PurchaseRepository, PurchaseStatus};
use crate::domain::DomainError;

/// PostgreSQL implementation of `PurchaseRepository`
#[derive(Debug, Clone)]
pub struct PostgresPurchaseRepository {
    pool: PgPool,
}

impl PostgresPurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PostgresPurchaseRepository {
    async fn record(&self, purchase: NewPurchase) -> Result<Purchase, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let product_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM products WHERE id = $1 FOR UPDATE")
                .bind(purchase.product_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to lock product row: {}", e)))?;

        let product_name = product_name.ok_or_else(|| {
            DomainError::not_found(format!("Product {} not found", purchase.product_id))
        })?;

        let total = purchase.total();
        let purchase_date = Utc::now().date_naive();

        let inserted = sqlx::query(
            r#"
            INSERT INTO purchases (product_id, quantity, unit_price, total, purchase_date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(purchase.product_id)
        .bind(purchase.quantity)
        .bind(purchase.unit_price)
        .bind(total)
        .bind(purchase_date)
        .bind(purchase.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert purchase: {}", e)))?;

        // Stock moves only for purchases created as completed.
        if purchase.status == PurchaseStatus::Completed {
            sqlx::query(
                "UPDATE products SET current_stock = current_stock + $1, updated_at = NOW() \
                 WHERE id = $2",
            )
            .bind(purchase.quantity)
            .bind(purchase.product_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to increment stock: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit purchase: {}", e)))?;

        Ok(Purchase {
            id: inserted.get("id"),
            product_id: purchase.product_id,
            product_name,
            quantity: purchase.quantity,
            unit_price: purchase.unit_price,
            total,
            purchase_date,
            status: purchase.status,
        })
    }

    async fn list(&self) -> Result<Vec<Purchase>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT pu.id, pu.product_id, p.name AS product_name, pu.quantity, pu.unit_price,
                   pu.total, pu.purchase_date, pu.status
            FROM purchases pu
            JOIN products p ON pu.product_id = p.id
            ORDER BY pu.purchase_date DESC, pu.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list purchases: {}", e)))?;

        Ok(rows
            .iter()
            .map(|row| {
                let status: String = row.get("status");
                Purchase {
                    id: row.get("id"),
                    product_id: row.get("product_id"),
                    product_name: row.get("product_name"),
                    quantity: row.get("quantity"),
                    unit_price: row.get("unit_price"),
                    total: row.get("total"),
                    purchase_date: row.get("purchase_date"),
                    status: PurchaseStatus::from_str_lossy(&status),
                }
            })
            .collect())
    }
}
