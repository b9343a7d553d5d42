//! HTTP route handlers for the carbon estimation API.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::error::ErrorResponse;
use crate::AppState;

use super::calculator::{self, EstimateError};
use super::models::{EmissionEstimate, EstimateRequest};

/// Create the estimation router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/estimate", post(estimate))
}

/// Health check for the carbon estimator.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "carbon-estimator",
        "version": "0.1.0"
    }))
}

/// Estimate the CO2-equivalent mass for one activity record.
async fn estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EmissionEstimate>, (StatusCode, Json<ErrorResponse>)> {
    // Serialize request for the audit hash
    let input_json = serde_json::to_string(&request).unwrap_or_default();

    match calculator::estimate(&request, &state.factors, &input_json).await {
        Ok(result) => Ok(Json(result)),
        Err(error) => Err(estimate_error_to_response(error)),
    }
}

fn estimate_error_to_response(error: EstimateError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("invalid_input", error.to_string())),
    )
}
