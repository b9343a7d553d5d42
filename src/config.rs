//! Environment-driven configuration.

use std::env;
use std::time::Duration;

/// Runtime configuration, loaded once at startup.
///
/// Missing provider API keys are not fatal: the matching provider reports
/// itself unavailable and the engines degrade to their fallback paths.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Origins allowed through CORS (the dashboard dev and prod hosts).
    pub allowed_origins: Vec<String>,
    /// Per-request timeout for outbound provider calls.
    pub provider_timeout: Duration,
    /// Retry attempts after the first provider call.
    pub max_retries: u32,
    pub factor_api_key: Option<String>,
    pub factor_base_url: String,
    pub directions_api_key: Option<String>,
    pub directions_base_url: String,
    pub weather_api_key: Option<String>,
    pub weather_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            allowed_origins: env_or(
                "ALLOWED_ORIGINS",
                "http://localhost:3000,http://127.0.0.1:3000",
            )
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
            provider_timeout: Duration::from_secs(parse_or("PROVIDER_TIMEOUT_SECS", 5)),
            max_retries: parse_or("PROVIDER_MAX_RETRIES", 3) as u32,
            factor_api_key: optional_key("CLIMATIQ_API_KEY"),
            factor_base_url: env_or("CLIMATIQ_BASE_URL", "https://api.climatiq.io"),
            directions_api_key: optional_key("GOOGLE_DIRECTIONS_API_KEY"),
            directions_base_url: env_or(
                "GOOGLE_DIRECTIONS_BASE_URL",
                "https://maps.googleapis.com",
            ),
            weather_api_key: optional_key("OPENWEATHERMAP_API_KEY"),
            weather_base_url: env_or(
                "OPENWEATHERMAP_BASE_URL",
                "https://api.openweathermap.org",
            ),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("invalid {key} value {value:?}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

fn optional_key(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            tracing::warn!("{key} not set; this provider will be unavailable");
            None
        }
    }
}
