//! Emission-factor provider client (Climatiq data API).

use std::future::Future;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use serde_json::json;

use crate::estimate::{ActivityType, Confidence};

use super::retry::{with_retry, RetryPolicy};
use super::ProviderError;

/// Per-unit emission factor resolved from the authoritative provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFactor {
    /// kg CO2e per km, kg, or kWh depending on the activity.
    pub factor_per_unit: f64,
    /// Provider confidence signal, when one was recognized.
    pub confidence: Option<Confidence>,
    /// Name of the dataset the factor came from.
    pub source: String,
}

/// Source of authoritative per-unit emission factors.
pub trait FactorSource {
    fn resolve_factor(
        &self,
        activity: ActivityType,
        location: Option<&str>,
    ) -> impl Future<Output = Result<ResolvedFactor, ProviderError>> + Send;
}

#[derive(Clone)]
pub struct FactorClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    retry: RetryPolicy,
    cache: Cache<ActivityType, ResolvedFactor>,
}

impl FactorClient {
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
                .max_capacity(64)
                .time_to_live(Duration::from_secs(3600))
                .build(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Curated provider factor ids per activity.
    fn activity_id(activity: ActivityType) -> &'static str {
        match activity {
            ActivityType::TransportCar => {
                "passenger_vehicle-vehicle_type_car-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na"
            }
            ActivityType::TransportBus => {
                "passenger_vehicle-vehicle_type_bus-fuel_source_na-engine_size_na-vehicle_age_na-vehicle_weight_na"
            }
            ActivityType::DietMeat => "consumer_goods-type_meat_products",
            ActivityType::EnergyElectricity => "electricity-supply_grid-source_grid_mix",
        }
    }

    fn dataset(activity: ActivityType) -> &'static str {
        match activity {
            ActivityType::DietMeat => "EXIOBASE",
            _ => "BEIS",
        }
    }

    /// Unit quantity, so the returned co2e is the per-unit factor itself.
    fn unit_parameters(activity: ActivityType) -> serde_json::Value {
        match activity {
            ActivityType::TransportCar | ActivityType::TransportBus => {
                json!({ "distance": 1.0, "distance_unit": "km" })
            }
            ActivityType::DietMeat => json!({ "weight": 1.0, "weight_unit": "kg" }),
            ActivityType::EnergyElectricity => json!({ "energy": 1.0, "energy_unit": "kWh" }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EstimatePayload {
    co2e: f64,
    co2e_calculation_origin: Option<String>,
    emission_factor: Option<FactorMeta>,
}

#[derive(Debug, Deserialize)]
struct FactorMeta {
    source: Option<String>,
}

fn parse_confidence(origin: &str) -> Option<Confidence> {
    match origin.to_ascii_lowercase().as_str() {
        "high" => Some(Confidence::High),
        "medium" => Some(Confidence::Medium),
        "low" => Some(Confidence::Low),
        _ => None,
    }
}

impl FactorSource for FactorClient {
    async fn resolve_factor(
        &self,
        activity: ActivityType,
        _location: Option<&str>,
    ) -> Result<ResolvedFactor, ProviderError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured("emission-factor"));
        };

        if let Some(hit) = self.cache.get(&activity).await {
            return Ok(hit);
        }

        let url = format!("{}/data/v1/estimate", self.base_url);
        // Factor ids are curated against the GB datasets; per-location
        // factors are not resolved here.
        let body = json!({
            "emission_factor": {
                "activity_id": Self::activity_id(activity),
                "source": Self::dataset(activity),
                "region": "GB",
                "year": "2023",
            },
            "parameters": Self::unit_parameters(activity),
        });

        let resolved = with_retry(&self.retry, || async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(key)
                .json(&body)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ProviderError::Status(status));
            }

            let payload: EstimatePayload = response
                .json()
                .await
                .map_err(|e| ProviderError::Payload(e.to_string()))?;

            if payload.co2e < 0.0 {
                return Err(ProviderError::Payload(format!(
                    "negative emission factor {}",
                    payload.co2e
                )));
            }

            Ok(ResolvedFactor {
                factor_per_unit: payload.co2e,
                confidence: payload
                    .co2e_calculation_origin
                    .as_deref()
                    .and_then(parse_confidence),
                source: payload
                    .emission_factor
                    .and_then(|f| f.source)
                    .unwrap_or_else(|| "climatiq".to_string()),
            })
        })
        .await?;

        self.cache.insert(activity, resolved.clone()).await;
        Ok(resolved)
    }
}
