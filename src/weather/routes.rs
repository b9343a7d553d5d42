//! HTTP route handlers for the weather proxy.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::error::ErrorResponse;
use crate::AppState;

use super::models::WeatherReport;

/// Create the weather router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/current", get(current))
}

/// Health check for the weather proxy.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "weather-proxy",
        "version": "0.1.0"
    }))
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    lat: f64,
    lon: f64,
}

/// Current conditions at a coordinate. There is no local fallback for
/// weather, so provider failures surface as 502.
async fn current(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<ErrorResponse>)> {
    match state.weather.observe(query.lat, query.lon).await {
        Ok(observation) => Ok(Json(WeatherReport {
            temperature_c: observation.temperature_c,
            conditions: observation.conditions,
            description: observation.description,
            humidity_percent: observation.humidity_percent,
            wind_speed_ms: observation.wind_speed_ms,
            retrieved_at: Utc::now(),
        })),
        Err(error) => {
            tracing::error!("weather provider unavailable: {error}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "weather_unavailable",
                    "weather data is currently unavailable",
                )),
            ))
        }
    }
}
