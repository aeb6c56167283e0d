//! Reorder endpoints

use axum::extract::State;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::order::Order;
use crate::infrastructure::order::CreateOrderRequest;

/// GET /orders
pub async fn list_orders(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.order_service.list().await?;
    Ok(Json(orders))
}

/// POST /orders
pub async fn create_order(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    let order = state.order_service.create(request).await?;
    Ok(Json(order))
}
