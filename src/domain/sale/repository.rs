//! Sale repository trait
//!
//! `record` is the transactional core of the system: implementations
//! must perform the stock check, the sale insert, and the stock
//! decrement as one atomic unit, serialized per product so that
//! concurrent sales cannot drive stock negative.

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewSale, Sale};
use crate::domain::DomainError;

/// Repository trait for sale storage
#[async_trait]
pub trait SaleRepository: Send + Sync + Debug {
    /// Atomically validate stock, insert the sale, and decrement the
    /// product's stock. Fails with `NotFound` for an unknown product
    /// and `InsufficientStock` when the quantity exceeds the stock on
    /// hand; neither failure leaves any side effect.
    async fn record(&self, sale: NewSale) -> Result<Sale, DomainError>;

    /// List all sales, most recent sale date first
    async fn list(&self) -> Result<Vec<Sale>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug)]
    struct StockedProduct {
        name: String,
        stock: i32,
    }

    #[derive(Debug, Default)]
    struct Inner {
        products: BTreeMap<i64, StockedProduct>,
        sales: Vec<Sale>,
        next_id: i64,
    }

    /// In-memory sale repository for testing.
    ///
    /// Holds its own product stock so the check-then-decrement runs
    /// under a single lock, mirroring the row lock the Postgres
    /// implementation takes.
    #[derive(Debug, Default, Clone)]
    pub struct MockSaleRepository {
        inner: Arc<RwLock<Inner>>,
    }

    impl MockSaleRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn add_product(&self, id: i64, name: &str, stock: i32) {
            let mut inner = self.inner.write().await;
            inner.products.insert(
                id,
                StockedProduct {
                    name: name.to_string(),
                    stock,
                },
            );
        }

        pub async fn stock_of(&self, id: i64) -> Option<i32> {
            let inner = self.inner.read().await;
            inner.products.get(&id).map(|p| p.stock)
        }

        pub async fn sale_count(&self) -> usize {
            let inner = self.inner.read().await;
            inner.sales.len()
        }
    }

    #[async_trait]
    impl SaleRepository for MockSaleRepository {
        async fn record(&self, sale: NewSale) -> Result<Sale, DomainError> {
            let mut inner = self.inner.write().await;

            let product = inner.products.get(&sale.product_id).ok_or_else(|| {
                DomainError::not_found(format!("Product {} not found", sale.product_id))
            })?;

            if product.stock < sale.quantity {
                return Err(DomainError::insufficient_stock(format!(
                    "requested {}, available {}",
                    sale.quantity, product.stock
                )));
            }

            let product_name = product.name.clone();
            inner.next_id += 1;

            let stored = Sale {
                id: inner.next_id,
                product_id: sale.product_id,
                product_name,
                quantity: sale.quantity,
                unit_price: sale.unit_price,
                total: sale.total(),
                salesperson_id: sale.salesperson_id,
                salesperson_name: format!("user-{}", sale.salesperson_id),
                sale_date: Utc::now().date_naive(),
            };

            if let Some(product) = inner.products.get_mut(&sale.product_id) {
                product.stock -= sale.quantity;
            }

            inner.sales.push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<Sale>, DomainError> {
            let inner = self.inner.read().await;
            Ok(inner.sales.clone())
        }
    }
}
