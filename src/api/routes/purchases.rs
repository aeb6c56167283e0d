//! Purchase endpoints, manager-only

use axum::extract::State;

use crate::api::middleware::RequireManager;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::purchase::Purchase;
use crate::infrastructure::purchase::RecordPurchaseRequest;

/// GET /purchases
pub async fn list_purchases(
    _auth: RequireManager,
    State(state): State<AppState>,
) -> Result<Json<Vec<Purchase>>, ApiError> {
    let purchases = state.purchase_service.list().await?;
    Ok(Json(purchases))
}

/// POST /purchases
pub async fn record_purchase(
    _auth: RequireManager,
    State(state): State<AppState>,
    Json(request): Json<RecordPurchaseRequest>,
) -> Result<Json<Purchase>, ApiError> {
    let purchase = state.purchase_service.record(request).await?;
    Ok(Json(purchase))
}
