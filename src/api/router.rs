//! HTTP router assembly

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::routes;
use super::state::AppState;

/// Create the full application router. All endpoints live under `/api`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health::health_check))
                .nest("/auth", auth::create_auth_router())
                .merge(routes::create_api_router()),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
