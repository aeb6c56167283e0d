//! Purchase repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewPurchase, Purchase, PurchaseStatus};
use crate::domain::DomainError;

/// Repository trait for purchase storage
#[async_trait]
pub trait PurchaseRepository: Send + Sync + Debug {
    /// Insert the purchase and, when its status is `Completed`,
    /// increment the product's stock atomically with the insert.
    async fn record(&self, purchase: NewPurchase) -> Result<Purchase, DomainError>;

    /// List all purchases, most recent purchase date first
    async fn list(&self) -> Result<Vec<Purchase>, DomainError>;
}
