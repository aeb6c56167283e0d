//! PostgreSQL sale repository
//!
//! The stock check and decrement run inside one transaction holding a
//! `FOR UPDATE` lock on the product row, so two concurrent sales
//! against the same product serialize on the check-then-decrement and
//! cannot overcommit stock.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::domain::sale::{NewSale, Sale, SaleRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of `SaleRepository`
#[derive(Debug, Clone)]
pub struct PostgresSaleRepository {
    pool: PgPool,
}

impl PostgresSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for PostgresSaleRepository {
    async fn record(&self, sale: NewSale) -> Result<Sale, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        // Lock the product row for the duration of the transaction.
        // Returning early from here drops the transaction, which
        // rolls it back.
        let product = sqlx::query(
            "SELECT name, current_stock FROM products WHERE id = $1 FOR UPDATE",
        )
        .bind(sale.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to lock product row: {}", e)))?;

        let Some(product) = product else {
            return Err(DomainError::not_found(format!(
                "Product {} not found",
                sale.product_id
            )));
        };

        let product_name: String = product.get("name");
        let current_stock: i32 = product.get("current_stock");

        if current_stock < sale.quantity {
            debug!(
                product_id = sale.product_id,
                requested = sale.quantity,
                available = current_stock,
                "Sale rejected for insufficient stock"
            );
            return Err(DomainError::insufficient_stock(format!(
                "requested {}, available {}",
                sale.quantity, current_stock
            )));
        }

        let salesperson_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM users WHERE id = $1")
                .bind(sale.salesperson_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to look up salesperson: {}", e))
                })?;

        let salesperson_name = salesperson_name.ok_or_else(|| {
            DomainError::not_found(format!("Salesperson {} not found", sale.salesperson_id))
        })?;

        let total = sale.total();
        let sale_date = Utc::now().date_naive();

        let inserted = sqlx::query(
            r#"
            INSERT INTO sales (product_id, quantity, unit_price, total, salesperson_id, sale_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(sale.unit_price)
        .bind(total)
        .bind(sale.salesperson_id)
        .bind(sale_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert sale: {}", e)))?;

        sqlx::query(
            "UPDATE products SET current_stock = current_stock - $1, updated_at = NOW() \
             WHERE id = $2",
        )
        .bind(sale.quantity)
        .bind(sale.product_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to decrement stock: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit sale: {}", e)))?;

        Ok(Sale {
            id: inserted.get("id"),
            product_id: sale.product_id,
            product_name,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            total,
            salesperson_id: sale.salesperson_id,
            salesperson_name,
            sale_date,
        })
    }

    async fn list(&self) -> Result<Vec<Sale>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.product_id, p.name AS product_name, s.quantity, s.unit_price,
                   s.total, s.salesperson_id, u.name AS salesperson_name, s.sale_date
            FROM sales s
            JOIN products p ON s.product_id = p.id
            JOIN users u ON s.salesperson_id = u.id
            ORDER BY s.sale_date DESC, s.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list sales: {}", e)))?;

        Ok(rows
            .iter()
            .map(|row| Sale {
                id: row.get("id"),
                product_id: row.get("product_id"),
                product_name: row.get("product_name"),
                quantity: row.get("quantity"),
                unit_price: row.get("unit_price"),
                total: row.get("total"),
                salesperson_id: row.get("salesperson_id"),
                salesperson_name: row.get("salesperson_name"),
                sale_date: row.get("sale_date"),
            })
            .collect())
    }
}
