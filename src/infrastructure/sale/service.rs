//! Sale service

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::sale::{NewSale, Sale, SaleRepository};
use crate::domain::DomainError;

/// Request for recording a sale. The salesperson is never part of the
/// request body; it is supplied by the handler from the verified token.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSaleRequest {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Sale service over a repository
#[derive(Debug)]
pub struct SaleService<R: SaleRepository> {
    repository: Arc<R>,
}

impl<R: SaleRepository> SaleService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn record(
        &self,
        request: RecordSaleRequest,
        salesperson_id: i64,
    ) -> Result<Sale, DomainError> {
        if request.quantity <= 0 {
            return Err(DomainError::validation("Quantity must be a positive integer"));
        }

        if !request.unit_price.is_finite() || request.unit_price <= 0.0 {
            return Err(DomainError::validation("Unit price must be a positive number"));
        }

        let sale = self
            .repository
            .record(NewSale {
                product_id: request.product_id,
                quantity: request.quantity,
                unit_price: request.unit_price,
                salesperson_id,
            })
            .await?;

        info!(
            sale_id = sale.id,
            product_id = sale.product_id,
            quantity = sale.quantity,
            total = sale.total,
            "Sale recorded"
        );

        Ok(sale)
    }

    pub async fn list(&self) -> Result<Vec<Sale>, DomainError> {
        self.repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sale::repository::mock::MockSaleRepository;

    async fn service_with_stock(stock: i32) -> (SaleService<MockSaleRepository>, Arc<MockSaleRepository>) {
        let repo = Arc::new(MockSaleRepository::new());
        repo.add_product(1, "Paracetamol 500mg", stock).await;
        (SaleService::new(repo.clone()), repo)
    }

    fn request(quantity: i32, unit_price: f64) -> RecordSaleRequest {
        RecordSaleRequest {
            product_id: 1,
            quantity,
            unit_price,
        }
    }

    #[tokio::test]
    async fn test_record_decrements_stock_and_computes_total() {
        let (service, repo) = service_with_stock(10).await;

        let sale = service.record(request(3, 2.0), 7).await.unwrap();

        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.total, 6.0);
        assert_eq!(sale.salesperson_id, 7);
        assert_eq!(repo.stock_of(1).await, Some(7));
        assert_eq!(repo.sale_count().await, 1);
    }

    #[tokio::test]
    async fn test_insufficient_stock_leaves_no_side_effects() {
        let (service, repo) = service_with_stock(7).await;

        let result = service.record(request(8, 2.0), 7).await;

        assert!(matches!(result, Err(DomainError::InsufficientStock { .. })));
        assert_eq!(repo.stock_of(1).await, Some(7));
        assert_eq!(repo.sale_count().await, 0);
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        // Product with stock 10: sale of 3 succeeds (stock 7, total
        // 6.00), then a sale of 8 is rejected and stock stays at 7.
        let (service, repo) = service_with_stock(10).await;

        let first = service.record(request(3, 2.0), 7).await.unwrap();
        assert_eq!(first.total, 6.0);
        assert_eq!(repo.stock_of(1).await, Some(7));

        let second = service.record(request(8, 2.0), 7).await;
        assert!(matches!(second, Err(DomainError::InsufficientStock { .. })));
        assert_eq!(repo.stock_of(1).await, Some(7));
        assert_eq!(repo.sale_count().await, 1);
    }

    #[tokio::test]
    async fn test_rejects_non_positive_quantity_and_price() {
        let (service, repo) = service_with_stock(10).await;

        for (quantity, price) in [(0, 2.0), (-3, 2.0), (3, 0.0), (3, -1.0), (3, f64::NAN)] {
            let result = service.record(request(quantity, price), 7).await;
            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }

        assert_eq!(repo.stock_of(1).await, Some(10));
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let (service, _) = service_with_stock(10).await;

        let result = service
            .record(
                RecordSaleRequest {
                    product_id: 99,
                    quantity: 1,
                    unit_price: 2.0,
                },
                7,
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_sales_never_overcommit() {
        // Ten concurrent sales of 3 units against a stock of 12: at
        // most four can succeed and stock never goes negative.
        let (service, repo) = service_with_stock(12).await;
        let service = Arc::new(service);

        let mut handles = Vec::new();
        for _ in 0..10 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.record(request(3, 2.0), 7).await
            }));
        }

        let mut succeeded = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                succeeded += 1;
            }
        }

        assert_eq!(succeeded, 4);
        assert_eq!(repo.stock_of(1).await, Some(0));
        assert_eq!(repo.sale_count().await, 4);
    }
}
