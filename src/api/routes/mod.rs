//! Inventory API endpoints

pub mod dashboard;
pub mod orders;
pub mod products;
pub mod purchases;
pub mod sales;
pub mod users;

use axum::{
    routing::{get, put},
    Router,
};

use crate::api::state::AppState;

/// Create the authenticated API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            put(users::update_user).delete(users::delete_user),
        )
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/sales", get(sales::list_sales).post(sales::record_sale))
        .route(
            "/purchases",
            get(purchases::list_purchases).post(purchases::record_purchase),
        )
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/dashboard", get(dashboard::dashboard))
        .route(
            "/reorder-recommendations",
            get(dashboard::reorder_recommendations),
        )
}
