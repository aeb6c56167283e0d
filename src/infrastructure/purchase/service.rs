//! Purchase service

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::purchase::{NewPurchase, Purchase, PurchaseRepository, PurchaseStatus};
use crate::domain::DomainError;

/// Request for recording a purchase
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPurchaseRequest {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub status: PurchaseStatus,
}

/// Purchase service over a repository
#[derive(Debug)]
pub struct PurchaseService<R: PurchaseRepository> {
    repository: Arc<R>,
}

impl<R: PurchaseRepository> PurchaseService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn record(&self, request: RecordPurchaseRequest) -> Result<Purchase, DomainError> {
        if request.quantity <= 0 {
            return Err(DomainError::validation("Quantity must be a positive integer"));
        }

        if !request.unit_price.is_finite() || request.unit_price <= 0.0 {
            return Err(DomainError::validation("Unit price must be a positive number"));
        }

        let purchase = self
            .repository
            .record(NewPurchase {
                product_id: request.product_id,
                quantity: request.quantity,
                unit_price: request.unit_price,
                status: request.status,
            })
            .await?;

        info!(
            purchase_id = purchase.id,
            product_id = purchase.product_id,
            quantity = purchase.quantity,
            status = purchase.status.as_str(),
            "Purchase recorded"
        );

        Ok(purchase)
    }

    pub async fn list(&self) -> Result<Vec<Purchase>, DomainError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase::repository::mock::MockPurchaseRepository;

    async fn service_with_stock(
        stock: i32,
    ) -> (PurchaseService<MockPurchaseRepository>, Arc<MockPurchaseRepository>) {
        let repo = Arc::new(MockPurchaseRepository::new());
        repo.add_product(1, "Ibuprofen 400mg", stock).await;
        (PurchaseService::new(repo.clone()), repo)
    }

    fn request(quantity: i32, unit_price: f64, status: PurchaseStatus) -> RecordPurchaseRequest {
        RecordPurchaseRequest {
            product_id: 1,
            quantity,
            unit_price,
            status,
        }
    }

    #[tokio::test]
    async fn test_completed_purchase_increments_stock() {
        let (service, repo) = service_with_stock(5).await;

        let purchase = service
            .record(request(20, 1.5, PurchaseStatus::Completed))
            .await
            .unwrap();

        assert_eq!(purchase.quantity, 20);
        assert!((purchase.total - 30.0).abs() < f64::EPSILON);
        assert_eq!(repo.stock_of(1).await, Some(25));
    }

    #[tokio::test]
    async fn test_pending_purchase_leaves_stock_untouched() {
        let (service, repo) = service_with_stock(5).await;

        let purchase = service
            .record(request(20, 1.5, PurchaseStatus::Pending))
            .await
            .unwrap();

        assert_eq!(purchase.status, PurchaseStatus::Pending);
        assert_eq!(repo.stock_of(1).await, Some(5));
    }

    #[tokio::test]
    async fn test_status_defaults_to_pending_in_request_body() {
        let request: RecordPurchaseRequest =
            serde_json::from_str(r#"{"product_id": 1, "quantity": 3, "unit_price": 2.0}"#).unwrap();

        assert_eq!(request.status, PurchaseStatus::Pending);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_quantity() {
        let (service, repo) = service_with_stock(5).await;

        let result = service.record(request(0, 1.5, PurchaseStatus::Completed)).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.stock_of(1).await, Some(5));
    }

    #[tokio::test]
    async fn test_rejects_non_positive_unit_price() {
        let (service, _) = service_with_stock(5).await;

        let result = service.record(request(3, 0.0, PurchaseStatus::Completed)).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let (service, _) = service_with_stock(5).await;

        let result = service
            .record(RecordPurchaseRequest {
                product_id: 99,
                quantity: 3,
                unit_price: 2.0,
                status: PurchaseStatus::Completed,
            })
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_returns_recorded_purchases() {
        let (service, _) = service_with_stock(5).await;

        service
            .record(request(2, 1.0, PurchaseStatus::Pending))
            .await
            .unwrap();
        service
            .record(request(4, 1.0, PurchaseStatus::Completed))
            .await
            .unwrap();

        let purchases = service.list().await.unwrap();
        assert_eq!(purchases.len(), 2);
    }
}
