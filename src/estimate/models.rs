//! Data types for carbon estimation.

use serde::{Deserialize, Serialize};

/// Activity category being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    TransportCar,
    TransportBus,
    DietMeat,
    EnergyElectricity,
}

/// Unit of measure paired with an activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ActivityUnit {
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "kWh")]
    KWh,
}

impl ActivityType {
    /// Unit conventionally paired with this activity. No cross-unit
    /// conversion is performed anywhere.
    pub fn expected_unit(self) -> ActivityUnit {
        match self {
            ActivityType::TransportCar | ActivityType::TransportBus => ActivityUnit::Km,
            ActivityType::DietMeat => ActivityUnit::Kg,
            ActivityType::EnergyElectricity => ActivityUnit::KWh,
        }
    }

    /// Local per-unit factor (kg CO2e) used when the provider is
    /// unavailable.
    pub fn fallback_factor(self) -> f64 {
        match self {
            ActivityType::TransportCar => 0.21,
            ActivityType::TransportBus => 0.089,
            ActivityType::DietMeat => 3.5,
            ActivityType::EnergyElectricity => 0.5,
        }
    }
}

/// How authoritative an estimate is. `Estimated` marks a local fallback
/// computation so the caller can render an "estimated calculation" notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Estimated,
}

/// Whether the factor came from the provider or the local table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateMethod {
    Api,
    Fallback,
}

/// Request payload for carbon estimation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EstimateRequest {
    pub activity_type: ActivityType,
    /// Amount in the activity's unit; must be positive.
    pub amount: f64,
    pub unit: ActivityUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Response payload for carbon estimation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmissionEstimate {
    /// kg CO2e, rounded to two decimal places.
    pub co2_kg: f64,
    pub confidence: Confidence,
    /// Provider dataset name, or `"fallback"`.
    pub source: String,
    pub method: EstimateMethod,
    /// SHA256 hash of the request payload.
    pub input_hash: String,
}
