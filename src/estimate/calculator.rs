//! Emission estimation logic with provider fallback.

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::providers::{FactorSource, ResolvedFactor};

use super::models::{
    Confidence, EmissionEstimate, EstimateMethod, EstimateRequest,
};

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();
    format!("sha256:{}", hex::encode(digest))
}

/// Stable two-decimal precision used for all reported masses, so repeated
/// calls with identical input are bit-for-bit reproducible.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Malformed caller input. This is the only error the estimator surfaces;
/// provider failures degrade to the fallback table instead.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("unit does not match activity type (expected {expected}, got {got})")]
    UnitMismatch { expected: String, got: String },
}

fn validate(request: &EstimateRequest) -> Result<(), EstimateError> {
    if !(request.amount > 0.0) {
        return Err(EstimateError::NonPositiveAmount {
            amount: request.amount,
        });
    }

    let expected = request.activity_type.expected_unit();
    if request.unit != expected {
        return Err(EstimateError::UnitMismatch {
            expected: format!("{expected:?}"),
            got: format!("{:?}", request.unit),
        });
    }

    Ok(())
}

/// Assemble the estimate once the provider outcome is known.
fn build_estimate(
    request: &EstimateRequest,
    resolved: Option<ResolvedFactor>,
    input_hash: String,
) -> EmissionEstimate {
    match resolved {
        Some(factor) => EmissionEstimate {
            co2_kg: round2(request.amount * factor.factor_per_unit),
            confidence: factor.confidence.unwrap_or(Confidence::High),
            source: factor.source,
            method: EstimateMethod::Api,
            input_hash,
        },
        None => EmissionEstimate {
            co2_kg: round2(request.amount * request.activity_type.fallback_factor()),
            confidence: Confidence::Estimated,
            source: "fallback".to_string(),
            method: EstimateMethod::Fallback,
            input_hash,
        },
    }
}

/// Estimate the CO2-equivalent mass of an activity.
///
/// Resolves the per-unit factor from `source`; any provider failure is
/// absorbed here and the local coefficient table takes over. Only malformed
/// input errors out.
pub async fn estimate(
    request: &EstimateRequest,
    source: &impl FactorSource,
    input_json: &str,
) -> Result<EmissionEstimate, EstimateError> {
    validate(request)?;
    let input_hash = sha256_hex(input_json);

    let resolved = match source
        .resolve_factor(request.activity_type, request.location.as_deref())
        .await
    {
        Ok(factor) => Some(factor),
        Err(error) => {
            tracing::warn!("emission-factor provider unavailable, using fallback: {error}");
            None
        }
    };

    Ok(build_estimate(request, resolved, input_hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::models::{ActivityType, ActivityUnit};
    use crate::providers::ProviderError;
    use approx::assert_relative_eq;

    /// Provider that always fails, forcing the fallback path.
    struct Unavailable;

    impl FactorSource for Unavailable {
        async fn resolve_factor(
            &self,
            _activity: ActivityType,
            _location: Option<&str>,
        ) -> Result<ResolvedFactor, ProviderError> {
            Err(ProviderError::NotConfigured("test"))
        }
    }

    /// Provider that resolves a fixed factor.
    struct Fixed {
        factor: f64,
        confidence: Option<Confidence>,
    }

    impl FactorSource for Fixed {
        async fn resolve_factor(
            &self,
            _activity: ActivityType,
            _location: Option<&str>,
        ) -> Result<ResolvedFactor, ProviderError> {
            Ok(ResolvedFactor {
                factor_per_unit: self.factor,
                confidence: self.confidence,
                source: "BEIS".to_string(),
            })
        }
    }

    fn car_trip(amount: f64) -> EstimateRequest {
        EstimateRequest {
            activity_type: ActivityType::TransportCar,
            amount,
            unit: ActivityUnit::Km,
            location: None,
        }
    }

    #[tokio::test]
    async fn falls_back_when_provider_unavailable() {
        let result = estimate(&car_trip(50.0), &Unavailable, "{}").await.unwrap();

        assert_relative_eq!(result.co2_kg, 10.5);
        assert_eq!(result.method, EstimateMethod::Fallback);
        assert_eq!(result.confidence, Confidence::Estimated);
        assert_eq!(result.source, "fallback");
    }

    #[tokio::test]
    async fn uses_provider_factor_when_available() {
        let source = Fixed {
            factor: 0.18,
            confidence: None,
        };
        let result = estimate(&car_trip(100.0), &source, "{}").await.unwrap();

        assert_relative_eq!(result.co2_kg, 18.0);
        assert_eq!(result.method, EstimateMethod::Api);
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.source, "BEIS");
    }

    #[tokio::test]
    async fn keeps_provider_confidence_signal() {
        let source = Fixed {
            factor: 0.18,
            confidence: Some(Confidence::Medium),
        };
        let result = estimate(&car_trip(10.0), &source, "{}").await.unwrap();

        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[tokio::test]
    async fn repeated_calls_are_bit_identical() {
        let request = car_trip(33.333);
        let first = estimate(&request, &Unavailable, "{}").await.unwrap();
        let second = estimate(&request, &Unavailable, "{}").await.unwrap();

        assert_eq!(first.co2_kg.to_bits(), second.co2_kg.to_bits());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn fallback_covers_every_activity() {
        let cases = [
            (ActivityType::TransportCar, ActivityUnit::Km, 0.21),
            (ActivityType::TransportBus, ActivityUnit::Km, 0.089),
            (ActivityType::DietMeat, ActivityUnit::Kg, 3.5),
            (ActivityType::EnergyElectricity, ActivityUnit::KWh, 0.5),
        ];

        for (activity_type, unit, factor) in cases {
            let request = EstimateRequest {
                activity_type,
                amount: 10.0,
                unit,
                location: None,
            };
            let result = estimate(&request, &Unavailable, "{}").await.unwrap();
            assert_relative_eq!(result.co2_kg, round2(10.0 * factor));
            assert!(result.co2_kg >= 0.0);
        }
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let result = estimate(&car_trip(0.0), &Unavailable, "{}").await;
        assert!(matches!(
            result,
            Err(EstimateError::NonPositiveAmount { .. })
        ));

        let result = estimate(&car_trip(-3.0), &Unavailable, "{}").await;
        assert!(matches!(
            result,
            Err(EstimateError::NonPositiveAmount { .. })
        ));
    }

    #[tokio::test]
    async fn rejects_mismatched_unit() {
        let request = EstimateRequest {
            activity_type: ActivityType::DietMeat,
            amount: 2.0,
            unit: ActivityUnit::Km,
            location: None,
        };

        let result = estimate(&request, &Unavailable, "{}").await;
        assert!(matches!(result, Err(EstimateError::UnitMismatch { .. })));
    }

    #[tokio::test]
    async fn input_hash_has_stable_shape() {
        let result = estimate(&car_trip(5.0), &Unavailable, r#"{"test": true}"#)
            .await
            .unwrap();

        assert!(result.input_hash.starts_with("sha256:"));
        assert_eq!(result.input_hash.len(), 7 + 64);
    }
}
