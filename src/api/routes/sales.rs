//! Sale endpoints
//!
//! The salesperson on a recorded sale always comes from the verified
//! token, never from the request body.

use axum::extract::State;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::sale::Sale;
use crate::infrastructure::sale::RecordSaleRequest;

/// GET /sales
pub async fn list_sales(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Sale>>, ApiError> {
    let sales = state.sale_service.list().await?;
    Ok(Json(sales))
}

/// POST /sales
pub async fn record_sale(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(request): Json<RecordSaleRequest>,
) -> Result<Json<Sale>, ApiError> {
    let sale = state.sale_service.record(request, auth.id).await?;
    Ok(Json(sale))
}
