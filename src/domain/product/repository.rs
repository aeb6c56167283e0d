//! Product repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Product, ProductDraft};
use crate::domain::DomainError;

/// Repository trait for product storage
#[async_trait]
pub trait ProductRepository: Send + Sync + Debug {
    /// Insert a new product
    async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError>;

    /// Replace an existing product
    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, DomainError>;

    /// Delete a product; fails with `Conflict` when sales, purchases,
    /// or orders still reference it
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// List all products ordered by name
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
}
