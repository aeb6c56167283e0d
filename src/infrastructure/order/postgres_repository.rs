//! PostgreSQL order repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domain::order::{NewOrder, Order, OrderRepository, OrderStatus};
use crate::domain::DomainError;

/// PostgreSQL implementation of `OrderRepository`
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
        let product_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM products WHERE id = $1")
                .bind(order.product_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::storage(format!("Failed to look up product: {}", e)))?;

        let product_name = product_name.ok_or_else(|| {
            DomainError::not_found(format!("Product {} not found", order.product_id))
        })?;

        let total = order.total();
        let order_date = Utc::now().date_naive();

        let inserted = sqlx::query(
            r#"
            INSERT INTO orders (product_id, quantity, unit_price, total, order_date, supplier, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending')
            RETURNING id
            "#,
        )
        .bind(order.product_id)
        .bind(order.quantity)
        .bind(order.unit_price)
        .bind(total)
        .bind(order_date)
        .bind(&order.supplier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert order: {}", e)))?;

        Ok(Order {
            id: inserted.get("id"),
            product_id: order.product_id,
            product_name,
            quantity: order.quantity,
            unit_price: order.unit_price,
            total,
            order_date,
            supplier: order.supplier,
            status: OrderStatus::Pending,
        })
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT o.id, o.product_id, p.name AS product_name, o.quantity, o.unit_price,
                   o.total, o.order_date, o.supplier, o.status
            FROM orders o
            JOIN products p ON o.product_id = p.id
            ORDER BY o.order_date DESC, o.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list orders: {}", e)))?;

        Ok(rows
            .iter()
            .map(|row| {
                let status: String = row.get("status");
                Order {
                    id: row.get("id"),
                    product_id: row.get("product_id"),
                    product_name: row.get("product_name"),
                    quantity: row.get("quantity"),
                    unit_price: row.get("unit_price"),
                    total: row.get("total"),
                    order_date: row.get("order_date"),
                    supplier: row.get("supplier"),
                    status: OrderStatus::from_str_lossy(&status),
                }
            })
            .collect())
    }
}
