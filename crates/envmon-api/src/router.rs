use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/samples", get(handlers::list_samples))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
