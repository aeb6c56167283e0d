//! Pharmacy Inventory API
//!
//! Backend for a pharmacy inventory and point-of-sale system:
//! - Product catalog with stock levels and reorder points
//! - Atomic sale recording that never oversells
//! - Purchases and supplier reorders
//! - JWT authentication with manager and salesperson roles
//! - Dashboard aggregates and reorder recommendations

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::PgPool;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::order::{OrderService, PostgresOrderRepository};
use infrastructure::product::{PostgresProductRepository, ProductService};
use infrastructure::purchase::{PostgresPurchaseRepository, PurchaseService};
use infrastructure::reporting::{PostgresReportingRepository, ReportingService};
use infrastructure::sale::{PostgresSaleRepository, SaleService};
use infrastructure::user::{Argon2Hasher, PostgresUserRepository, UserService};

/// Wire the PostgreSQL-backed services into an application state
pub fn create_app_state(pool: PgPool, config: &AppConfig) -> AppState {
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    )));

    let user_service = Arc::new(UserService::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(Argon2Hasher::new()),
    ));
    let product_service = Arc::new(ProductService::new(Arc::new(
        PostgresProductRepository::new(pool.clone()),
    )));
    let sale_service = Arc::new(SaleService::new(Arc::new(PostgresSaleRepository::new(
        pool.clone(),
    ))));
    let purchase_service = Arc::new(PurchaseService::new(Arc::new(
        PostgresPurchaseRepository::new(pool.clone()),
    )));
    let order_service = Arc::new(OrderService::new(Arc::new(PostgresOrderRepository::new(
        pool.clone(),
    ))));
    let reporting_service = Arc::new(ReportingService::new(Arc::new(
        PostgresReportingRepository::new(pool),
    )));

    AppState {
        user_service,
        product_service,
        sale_service,
        purchase_service,
        order_service,
        reporting_service,
        jwt_service,
    }
}
