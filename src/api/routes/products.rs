//! Product catalog endpoints
//!
//! Reads are open to any authenticated role; writes are manager-only.

use axum::extract::{Path, State};
use tracing::info;

use crate::api::middleware::{AuthUser, RequireManager};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::product::{Product, ProductDraft};

/// GET /products
pub async fn list_products(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.product_service.list().await?;
    Ok(Json(products))
}

/// POST /products
pub async fn create_product(
    _auth: RequireManager,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, ApiError> {
    let product = state.product_service.create(draft).await?;

    info!(product_id = product.id, name = %product.name, "Product created");

    Ok(Json(product))
}

/// PUT /products/{id}
pub async fn update_product(
    _auth: RequireManager,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, ApiError> {
    let product = state.product_service.update(id, draft).await?;
    Ok(Json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    _auth: RequireManager,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.product_service.delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("Product {} not found", id)));
    }

    Ok(Json(serde_json::json!({"message": "Product deleted"})))
}
