//! Order repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewOrder, Order};
use crate::domain::DomainError;

/// Repository trait for order storage
#[async_trait]
pub trait OrderRepository: Send + Sync + Debug {
    /// Insert a new pending order; fails with `NotFound` for an
    /// unknown product. Orders never move stock.
    async fn create(&self, order: NewOrder) -> Result<Order, DomainError>;

    /// List all orders, most recent order date first
    async fn list(&self) -> Result<Vec<Order>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::order::OrderStatus;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug, Default)]
    struct Inner {
        products: BTreeMap<i64, String>,
        orders: Vec<Order>,
        next_id: i64,
    }

    /// In-memory order repository for testing
    #[derive(Debug, Default, Clone)]
    pub struct MockOrderRepository {
        inner: Arc<RwLock<Inner>>,
    }

    impl MockOrderRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn add_product(&self, id: i64, name: &str) {
            let mut inner = self.inner.write().await;
            inner.products.insert(id, name.to_string());
        }
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn create(&self, order: NewOrder) -> Result<Order, DomainError> {
            let mut inner = self.inner.write().await;

            let product_name = inner.products.get(&order.product_id).cloned().ok_or_else(
                || DomainError::not_found(format!("Product {} not found", order.product_id)),
            )?;

            inner.next_id += 1;

            let stored = Order {
                id: inner.next_id,
                product_id: order.product_id,
                product_name,
                quantity: order.quantity,
                unit_price: order.unit_price,
                total: order.total(),
                order_date: Utc::now().date_naive(),
                supplier: order.supplier,
                status: OrderStatus::Pending,
            };

            inner.orders.push(stored.clone());
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<Order>, DomainError> {
            let inner = self.inner.read().await;
            Ok(inner.orders.clone())
        }
    }
}
