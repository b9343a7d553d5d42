//! Weather provider client (OpenWeatherMap current-conditions API).

use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;

use super::retry::{with_retry, RetryPolicy};
use super::ProviderError;

/// Current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub conditions: String,
    pub description: String,
    pub humidity_percent: i64,
    pub wind_speed_ms: f64,
}

#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
    /// Keyed by coordinates rounded to ~1 km cells.
    cache: Cache<(i64, i64), WeatherObservation>,
}

impl WeatherClient {
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
            cache: Cache::builder()
                .max_capacity(1024)
                .time_to_live(Duration::from_secs(600))
                .build(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn observe(&self, lat: f64, lon: f64) -> Result<WeatherObservation, ProviderError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured("weather"));
        };

        let cell = ((lat * 100.0).round() as i64, (lon * 100.0).round() as i64);
        if let Some(hit) = self.cache.get(&cell).await {
            return Ok(hit);
        }

        let url = format!("{}/data/2.5/weather", self.base_url);
        let payload: WeatherPayload = with_retry(&self.retry, || async {
            let response = self
                .http
                .get(&url)
                .query(&[("lat", lat), ("lon", lon)])
                .query(&[("appid", key), ("units", "metric")])
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

        let condition = payload
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("missing weather conditions".to_string()))?;

        let observation = WeatherObservation {
            temperature_c: payload.main.temp,
            conditions: condition.main,
            description: condition.description,
            humidity_percent: payload.main.humidity,
            wind_speed_ms: payload.wind.speed,
        };

        self.cache.insert(cell, observation.clone()).await;
        Ok(observation)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    main: MainPayload,
    weather: Vec<ConditionPayload>,
    wind: WindPayload,
}

#[derive(Debug, Deserialize)]
struct MainPayload {
    temp: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct ConditionPayload {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindPayload {
    speed: f64,
}
