//! Routing provider client (Google Directions API).

use std::future::Future;

use serde::Deserialize;

use crate::route::TravelMode;

use super::retry::{with_retry, RetryPolicy};
use super::ProviderError;

/// Route resolved by the directions provider for a single mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub distance_km: f64,
    pub duration_min: f64,
    /// Address the provider snapped the origin to.
    pub start_address: String,
    /// Address the provider snapped the destination to.
    pub end_address: String,
    /// Encoded overview polyline for map rendering.
    pub polyline: String,
}

/// Source of distance/duration data between two named places.
pub trait RouteSource {
    fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> impl Future<Output = Result<ResolvedRoute, ProviderError>> + Send;
}

#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
}

impl DirectionsClient {
    pub fn new(
        http: reqwest::Client,
        api_key: Option<String>,
        base_url: String,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            api_key,
            base_url,
            retry,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsPayload {
    status: String,
    #[serde(default)]
    routes: Vec<RoutePayload>,
}

#[derive(Debug, Deserialize)]
struct RoutePayload {
    legs: Vec<LegPayload>,
    overview_polyline: PolylinePayload,
}

#[derive(Debug, Deserialize)]
struct PolylinePayload {
    points: String,
}

#[derive(Debug, Deserialize)]
struct LegPayload {
    distance: ValuePayload,
    duration: ValuePayload,
    start_address: String,
    end_address: String,
}

#[derive(Debug, Deserialize)]
struct ValuePayload {
    /// Meters for distance, seconds for duration.
    value: f64,
}

fn status_message(status: &str) -> String {
    match status {
        "NOT_FOUND" => "one or more locations could not be found".to_string(),
        "ZERO_RESULTS" => "no route exists between the locations".to_string(),
        "INVALID_REQUEST" => "invalid routing request".to_string(),
        "OVER_QUERY_LIMIT" => "provider query limit exceeded".to_string(),
        "REQUEST_DENIED" => "provider request denied".to_string(),
        other => format!("provider status {other}"),
    }
}

impl RouteSource for DirectionsClient {
    async fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<ResolvedRoute, ProviderError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured("directions"));
        };

        let url = format!("{}/maps/api/directions/json", self.base_url);
        let payload: DirectionsPayload = with_retry(&self.retry, || async {
            let response = self
                .http
                .get(&url)
                .query(&[
                    ("origin", origin),
                    ("destination", destination),
                    ("mode", mode.as_str()),
                    ("key", key),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::Status(status));
            }

            response
                .json()
                .await
                .map_err(|e| ProviderError::Payload(e.to_string()))
        })
        .await?;

        if payload.status != "OK" {
            return Err(ProviderError::Payload(status_message(&payload.status)));
        }

        let route = payload
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("no routes in response".to_string()))?;
        let leg = route
            .legs
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("route has no legs".to_string()))?;

        Ok(ResolvedRoute {
            distance_km: leg.distance.value / 1000.0,
            duration_min: leg.duration.value / 60.0,
            start_address: leg.start_address,
            end_address: leg.end_address,
            polyline: route.overview_polyline.points,
        })
    }
}
