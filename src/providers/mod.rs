//! Clients for the external data providers.
//!
//! The emission-factor, directions, and weather APIs are reached over HTTP
//! with a bounded timeout and an injectable retry policy. Provider failures
//! never leave this layer as raw network errors; callers see
//! [`ProviderError`] and decide whether to fall back or surface a typed
//! failure of their own.

use std::time::Duration;

use thiserror::Error;

mod directions;
mod factors;
mod retry;
mod weather;

pub use directions::{DirectionsClient, ResolvedRoute, RouteSource};
pub use factors::{FactorClient, FactorSource, ResolvedFactor};
pub use retry::RetryPolicy;
pub use weather::{WeatherClient, WeatherObservation};

/// Why a provider call did not produce a usable result.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API key for this provider was never configured.
    #[error("{0} provider not configured")]
    NotConfigured(&'static str),

    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The provider answered 200 but the payload was unusable.
    #[error("malformed provider payload: {0}")]
    Payload(String),
}

impl ProviderError {
    /// Server-class and transport failures may succeed on a later attempt;
    /// everything else fails immediately.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Transport(_) => true,
            ProviderError::Status(status) => status.is_server_error(),
            ProviderError::NotConfigured(_) | ProviderError::Payload(_) => false,
        }
    }
}

/// Shared HTTP client for all provider calls, bounded by the configured
/// per-request timeout.
pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}
