//! Data types for route comparison.

use serde::{Deserialize, Serialize};

/// Transport mode understood by the routing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Transit,
    Walking,
    Bicycling,
}

impl TravelMode {
    /// Average-occupancy emission factor (kg CO2e per km). Deliberately
    /// coarser than the per-activity factors: these are mode-level
    /// heuristics, not point estimates. Zero-emission modes report zero
    /// regardless of distance.
    pub fn emission_factor(self) -> f64 {
        match self {
            TravelMode::Driving => 0.171,
            TravelMode::Transit => 0.089,
            TravelMode::Walking | TravelMode::Bicycling => 0.0,
        }
    }

    /// Query-parameter spelling for the routing provider.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Transit => "transit",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

/// Request payload for route comparison.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompareRequest {
    pub origin: String,
    pub destination: String,
    pub modes: Vec<TravelMode>,
}

/// One resolved candidate route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteCandidate {
    pub mode: TravelMode,
    pub distance_km: f64,
    pub duration_min: f64,
    pub co2_kg: f64,
    pub start_address: String,
    pub end_address: String,
    /// Encoded overview polyline for map rendering.
    pub polyline: String,
}

/// Ranked comparison across the requested modes, in caller order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteComparison {
    pub candidates: Vec<RouteCandidate>,
    /// Lowest-emission resolved mode.
    pub recommended_mode: TravelMode,
    /// Highest candidate emission minus the recommended mode's.
    pub savings_kg: f64,
}
