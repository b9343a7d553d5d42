//! HTTP route handlers for the recommendation API.

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};

use crate::AppState;

use super::models::{RecommendRequest, RecommendationResult};
use super::selector;

/// Create the recommendation router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/predict", post(recommend))
}

/// Health check for the recommendation selector.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "recommendation-selector",
        "version": "0.1.0"
    }))
}

/// Pick the highest-leverage behaviour change for a breakdown. Selection
/// is total, so this handler cannot fail.
async fn recommend(Json(request): Json<RecommendRequest>) -> Json<RecommendationResult> {
    Json(selector::select(
        &request.breakdown,
        request.context.as_ref(),
        request.strategy,
    ))
}
