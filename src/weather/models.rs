//! Data types for the weather proxy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at the requested coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    /// Main condition group, e.g. "Clear" or "Rain".
    pub conditions: String,
    pub description: String,
    pub humidity_percent: i64,
    pub wind_speed_ms: f64,
    pub retrieved_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_round_trips_through_json() {
        let report = WeatherReport {
            temperature_c: 18.4,
            conditions: "Clouds".to_string(),
            description: "scattered clouds".to_string(),
            humidity_percent: 62,
            wind_speed_ms: 3.1,
            retrieved_at: "2025-06-01T12:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_string(&report).unwrap();
        let back: WeatherReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
