//! User management endpoints, manager-only

use axum::extract::{Path, State};
use tracing::info;

use crate::api::middleware::RequireManager;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// GET /users
pub async fn list_users(
    _auth: RequireManager,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

/// POST /users
pub async fn create_user(
    RequireManager(auth): RequireManager,
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.create(request).await?;

    info!(user_id = user.id, created_by = auth.id, "User created");

    Ok(Json(user))
}

/// PUT /users/{id}
pub async fn update_user(
    _auth: RequireManager,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.update(id, request).await?;
    Ok(Json(user))
}

/// DELETE /users/{id}
pub async fn delete_user(
    _auth: RequireManager,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.user_service.delete(id).await?;

    if !deleted {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }

    Ok(Json(serde_json::json!({"message": "User deleted"})))
}
