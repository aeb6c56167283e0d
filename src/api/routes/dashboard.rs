//! Dashboard and reorder recommendation endpoints

use axum::extract::State;

use crate::api::middleware::AuthUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::reporting::{DashboardSummary, ReorderRecommendation};

/// GET /dashboard
pub async fn dashboard(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let summary = state.reporting_service.dashboard().await?;
    Ok(Json(summary))
}

/// GET /reorder-recommendations
pub async fn reorder_recommendations(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ReorderRecommendation>>, ApiError> {
    let recommendations = state.reporting_service.reorder_recommendations().await?;
    Ok(Json(recommendations))
}
