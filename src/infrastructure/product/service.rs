//! Product service

use std::sync::Arc;

use crate::domain::product::{validate_product, Product, ProductDraft, ProductRepository};
use crate::domain::DomainError;

/// Product service over a repository
#[derive(Debug)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        validate_product(&draft).map_err(|e| DomainError::validation(e.to_string()))?;
        self.repository.create(draft).await
    }

    pub async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, DomainError> {
        validate_product(&draft).map_err(|e| DomainError::validation(e.to_string()))?;
        self.repository.update(id, draft).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        self.repository.list().await
    }
}
