//! Reporting service

use std::sync::Arc;

use crate::domain::reporting::{DashboardSummary, ReorderRecommendation, ReportingRepository};
use crate::domain::DomainError;

/// Reporting service over a read-only repository
#[derive(Debug)]
pub struct ReportingService<R: ReportingRepository> {
    repository: Arc<R>,
}

impl<R: ReportingRepository> ReportingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, DomainError> {
        self.repository.dashboard().await
    }

    pub async fn reorder_recommendations(
        &self,
    ) -> Result<Vec<ReorderRecommendation>, DomainError> {
        let products = self.repository.low_stock_products().await?;
        Ok(products
            .into_iter()
            .map(ReorderRecommendation::for_product)
            .collect())
    }
}
