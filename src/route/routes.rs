//! HTTP route handlers for the route comparison API.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::error::ErrorResponse;
use crate::AppState;

use super::comparator::{self, RouteError};
use super::models::{CompareRequest, RouteComparison};

/// Create the route comparison router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/compare", post(compare))
}

/// Health check for the route comparator.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "route-comparator",
        "version": "0.1.0"
    }))
}

/// Compare the requested transport modes between two places.
async fn compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<RouteComparison>, (StatusCode, Json<ErrorResponse>)> {
    match comparator::compare(
        &request.origin,
        &request.destination,
        &request.modes,
        &state.directions,
    )
    .await
    {
        Ok(result) => Ok(Json(result)),
        Err(error) => Err(route_error_to_response(error)),
    }
}

/// Convert RouteError to HTTP error response
fn route_error_to_response(error: RouteError) -> (StatusCode, Json<ErrorResponse>) {
    match error {
        RouteError::NoModes => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "invalid_input",
                "at least one transport mode is required",
            )),
        ),
        RouteError::Resolution {
            origin,
            destination,
        } => {
            let message = format!("no route could be resolved between {origin} and {destination}");
            let details = serde_json::json!({
                "origin": origin,
                "destination": destination,
            });
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("route_resolution_failed", message).with_details(details)),
            )
        }
    }
}
