//! Application state for shared services

use std::sync::Arc;

use crate::domain::order::{Order, OrderRepository};
use crate::domain::product::{Product, ProductDraft, ProductRepository};
use crate::domain::purchase::{Purchase, PurchaseRepository};
use crate::domain::reporting::{
    DashboardSummary, ReorderRecommendation, ReportingRepository,
};
use crate::domain::sale::{Sale, SaleRepository};
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtAuthority;
use crate::infrastructure::order::{CreateOrderRequest, OrderService};
use crate::infrastructure::product::ProductService;
use crate::infrastructure::purchase::{PurchaseService, RecordPurchaseRequest};
use crate::infrastructure::reporting::ReportingService;
use crate::infrastructure::sale::{RecordSaleRequest, SaleService};
use crate::infrastructure::user::{CreateUserRequest, PasswordHasher, UpdateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub product_service: Arc<dyn ProductServiceTrait>,
    pub sale_service: Arc<dyn SaleServiceTrait>,
    pub purchase_service: Arc<dyn PurchaseServiceTrait>,
    pub order_service: Arc<dyn OrderServiceTrait>,
    pub reporting_service: Arc<dyn ReportingServiceTrait>,
    pub jwt_service: Arc<dyn JwtAuthority>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<User>, DomainError>;
    async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}

/// Trait for product service operations
#[async_trait::async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError>;
    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
}

/// Trait for sale service operations
#[async_trait::async_trait]
pub trait SaleServiceTrait: Send + Sync {
    async fn record(
        &self,
        request: RecordSaleRequest,
        salesperson_id: i64,
    ) -> Result<Sale, DomainError>;
    async fn list(&self) -> Result<Vec<Sale>, DomainError>;
}

/// Trait for purchase service operations
#[async_trait::async_trait]
pub trait PurchaseServiceTrait: Send + Sync {
    async fn record(&self, request: RecordPurchaseRequest) -> Result<Purchase, DomainError>;
    async fn list(&self) -> Result<Vec<Purchase>, DomainError>;
}

/// Trait for order service operations
#[async_trait::async_trait]
pub trait OrderServiceTrait: Send + Sync {
    async fn create(&self, request: CreateOrderRequest) -> Result<Order, DomainError>;
    async fn list(&self) -> Result<Vec<Order>, DomainError>;
}

/// Trait for reporting service operations
#[async_trait::async_trait]
pub trait ReportingServiceTrait: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardSummary, DomainError>;
    async fn reorder_recommendations(&self) -> Result<Vec<ReorderRecommendation>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        UserService::delete(self, id).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: ProductRepository + 'static> ProductServiceTrait for ProductService<R> {
    async fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        ProductService::create(self, draft).await
    }

    async fn update(&self, id: i64, draft: ProductDraft) -> Result<Product, DomainError> {
        ProductService::update(self, id, draft).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        ProductService::delete(self, id).await
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        ProductService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: SaleRepository + 'static> SaleServiceTrait for SaleService<R> {
    async fn record(
        &self,
        request: RecordSaleRequest,
        salesperson_id: i64,
    ) -> Result<Sale, DomainError> {
        SaleService::record(self, request, salesperson_id).await
    }

    async fn list(&self) -> Result<Vec<Sale>, DomainError> {
        SaleService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: PurchaseRepository + 'static> PurchaseServiceTrait for PurchaseService<R> {
    async fn record(&self, request: RecordPurchaseRequest) -> Result<Purchase, DomainError> {
        PurchaseService::record(self, request).await
    }

    async fn list(&self) -> Result<Vec<Purchase>, DomainError> {
        PurchaseService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: OrderRepository + 'static> OrderServiceTrait for OrderService<R> {
    async fn create(&self, request: CreateOrderRequest) -> Result<Order, DomainError> {
        OrderService::create(self, request).await
    }

    async fn list(&self) -> Result<Vec<Order>, DomainError> {
        OrderService::list(self).await
    }
}

#[async_trait::async_trait]
impl<R: ReportingRepository + 'static> ReportingServiceTrait for ReportingService<R> {
    async fn dashboard(&self) -> Result<DashboardSummary, DomainError> {
        ReportingService::dashboard(self).await
    }

    async fn reorder_recommendations(&self) -> Result<Vec<ReorderRecommendation>, DomainError> {
        ReportingService::reorder_recommendations(self).await
    }
}
