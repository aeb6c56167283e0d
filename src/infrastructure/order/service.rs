//! Order service

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::order::{NewOrder, Order, OrderRepository};
use crate::domain::DomainError;

/// Request for creating a reorder toward a supplier
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub supplier: String,
}

/// Order service over a repository
#[derive(Debug)]
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        if request.quantity <= 0 {
            return Err(DomainError::validation("Quantity must be a positive integer"));
        }

        if !request.unit_price.is_finite() || request.unit_price < 0.0 {
            return Err(DomainError::validation("Unit price must be a non-negative number"));
        }

        let order = self
            .repository
            .create(NewOrder {
                product_id: request.product_id,
                quantity: request.quantity,
                unit_price: request.unit_price,
                supplier: request.supplier,
            })
            .await?;

        info!(
            order_id = order.id,
            product_id = order.product_id,
            quantity = order.quantity,
            supplier = %order.supplier,
            "Order created"
        );

        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        self.repository.list().await
    }
}
