//! PostgreSQL product repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::product::{Product, ProductDraft, ProductRepository};
use crate::domain::DomainError;

const PRODUCT_COLUMNS: &str = "id, name, category, current_stock, reorder_point, max_stock, \
                               unit_price, supplier, created_at, updated_at";

/// PostgreSQL implementation of `ProductRepository`
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO products (name, category, current_stock, reorder_point,
                                  max_stock, unit_price, supplier)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.current_stock)
        .bind(draft.reorder_point)
        .bind(draft.max_stock)
        .bind(draft.unit_price)
        .bind(&draft.supplier)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create product: {}", e)))?;

        Ok(row_to_product(&row))
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE products
            SET name = $2, category = $3, current_stock = $4, reorder_point = $5,
                max_stock = $6, unit_price = $7, supplier = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.current_stock)
        .bind(draft.reorder_point)
        .bind(draft.max_stock)
        .bind(draft.unit_price)
        .bind(&draft.supplier)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update product: {}", e)))?;

        match row {
            Some(row) => Ok(row_to_product(&row)),
            None => Err(DomainError::not_found(format!("Product {} not found", id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::conflict(format!(
                        "Product {} is referenced by existing sales, purchases, or orders \
                         and cannot be deleted",
                        id
                    ))
                }
                _ => DomainError::storage(format!("Failed to delete product: {}", e)),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM products ORDER BY name",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list products: {}", e)))?;

        Ok(rows.iter().map(row_to_product).collect())
    }
}

pub(crate) fn row_to_product(row: &sqlx::postgres::PgRow) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        category: row.get("category"),
        current_stock: row.get("current_stock"),
        reorder_point: row.get("reorder_point"),
        max_stock: row.get("max_stock"),
        unit_price: row.get("unit_price"),
        supplier: row.get("supplier"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
