//! EcoWisely - Rust/Axum calculation engine
//!
//! Carbon estimation, route comparison, behaviour recommendations, and a
//! weather proxy for the dashboard. The Next.js front end continues to
//! handle accounts, persistence, and rendering.

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
pub mod estimate;
pub mod providers;
pub mod recommend;
pub mod route;
pub mod weather;

use config::Config;
use providers::{DirectionsClient, FactorClient, RetryPolicy, WeatherClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub factors: FactorClient,
    pub directions: DirectionsClient,
    pub weather: WeatherClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecowisely_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // One shared HTTP client; every provider call inherits its timeout.
    let http = providers::http_client(config.provider_timeout)?;
    let retry = RetryPolicy::new(config.max_retries);

    let state = AppState {
        factors: FactorClient::new(
            http.clone(),
            config.factor_api_key.clone(),
            config.factor_base_url.clone(),
            retry.clone(),
        ),
        directions: DirectionsClient::new(
            http.clone(),
            config.directions_api_key.clone(),
            config.directions_base_url.clone(),
            retry.clone(),
        ),
        weather: WeatherClient::new(
            http,
            config.weather_api_key.clone(),
            config.weather_base_url.clone(),
            retry,
        ),
    };

    // CORS for the dashboard origins
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Carbon estimation API
        .nest("/api/carbon", estimate::router())
        // Route comparison API
        .nest("/api/routes", route::router())
        // Recommendation API
        .nest("/api/recommend", recommend::router())
        // Weather proxy
        .nest("/api/weather", weather::router())
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Service banner
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "Carbon engine is online"
    }))
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ecowisely-engine",
        "providers": {
            "emission_factors": state.factors.is_configured(),
            "directions": state.directions.is_configured(),
            "weather": state.weather.is_configured(),
        }
    }))
}
