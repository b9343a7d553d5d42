//! Route comparison logic across transport modes.

use thiserror::Error;

use crate::providers::{ResolvedRoute, RouteSource};

use super::models::{RouteCandidate, RouteComparison, TravelMode};

/// Failures surfaced by route comparison. Per-mode provider failures are
/// absorbed by dropping the mode; only total failure errors out.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("at least one transport mode is required")]
    NoModes,

    #[error("no route could be resolved between {origin} and {destination}")]
    Resolution { origin: String, destination: String },
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn candidate(mode: TravelMode, route: ResolvedRoute) -> RouteCandidate {
    let distance_km = round2(route.distance_km);
    RouteCandidate {
        mode,
        distance_km,
        duration_min: round1(route.duration_min),
        co2_kg: round2(distance_km * mode.emission_factor()),
        start_address: route.start_address,
        end_address: route.end_address,
        polyline: route.polyline,
    }
}

/// Lowest-emission candidate; ties broken by shortest distance, then by
/// caller order.
fn recommended(candidates: &[RouteCandidate]) -> &RouteCandidate {
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.co2_kg < best.co2_kg
            || (candidate.co2_kg == best.co2_kg && candidate.distance_km < best.distance_km)
        {
            best = candidate;
        }
    }
    best
}

/// Resolve each requested mode through the provider and rank the survivors
/// by emissions.
pub async fn compare(
    origin: &str,
    destination: &str,
    modes: &[TravelMode],
    source: &impl RouteSource,
) -> Result<RouteComparison, RouteError> {
    if modes.is_empty() {
        return Err(RouteError::NoModes);
    }

    let mut candidates = Vec::with_capacity(modes.len());
    for &mode in modes {
        match source.resolve_route(origin, destination, mode).await {
            Ok(route) => candidates.push(candidate(mode, route)),
            Err(error) => {
                tracing::warn!(
                    "dropping mode {} from comparison: {error}",
                    mode.as_str()
                );
            }
        }
    }

    if candidates.is_empty() {
        return Err(RouteError::Resolution {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    }

    let best = recommended(&candidates);
    let recommended_mode = best.mode;
    let worst_co2 = candidates
        .iter()
        .map(|c| c.co2_kg)
        .fold(f64::MIN, f64::max);
    let savings_kg = round2(worst_co2 - best.co2_kg);

    Ok(RouteComparison {
        candidates,
        recommended_mode,
        savings_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderError;
    use approx::assert_relative_eq;

    /// Provider backed by a fixed per-mode table; unlisted modes fail.
    struct FixedRoutes(Vec<(TravelMode, f64, f64)>);

    impl FixedRoutes {
        fn route(distance_km: f64, duration_min: f64) -> ResolvedRoute {
            ResolvedRoute {
                distance_km,
                duration_min,
                start_address: "Origin St".to_string(),
                end_address: "Destination Ave".to_string(),
                polyline: "poly".to_string(),
            }
        }
    }

    impl RouteSource for FixedRoutes {
        async fn resolve_route(
            &self,
            _origin: &str,
            _destination: &str,
            mode: TravelMode,
        ) -> Result<ResolvedRoute, ProviderError> {
            self.0
                .iter()
                .find(|(m, _, _)| *m == mode)
                .map(|&(_, d, t)| Self::route(d, t))
                .ok_or_else(|| ProviderError::Payload("no route exists".to_string()))
        }
    }

    /// Provider where every mode fails.
    struct NoRoutes;

    impl RouteSource for NoRoutes {
        async fn resolve_route(
            &self,
            _origin: &str,
            _destination: &str,
            _mode: TravelMode,
        ) -> Result<ResolvedRoute, ProviderError> {
            Err(ProviderError::Payload("no route exists".to_string()))
        }
    }

    #[tokio::test]
    async fn ranks_transit_over_driving() {
        let source = FixedRoutes(vec![
            (TravelMode::Driving, 450.5, 360.0),
            (TravelMode::Transit, 460.2, 420.0),
        ]);

        let result = compare(
            "Istanbul",
            "Ankara",
            &[TravelMode::Driving, TravelMode::Transit],
            &source,
        )
        .await
        .unwrap();

        assert_eq!(result.candidates.len(), 2);
        assert_relative_eq!(result.candidates[0].co2_kg, 77.04);
        assert_relative_eq!(result.candidates[1].co2_kg, 40.96);
        assert_eq!(result.recommended_mode, TravelMode::Transit);
        assert_relative_eq!(result.savings_kg, 36.08);
    }

    #[tokio::test]
    async fn zero_emission_modes_yield_zero_savings() {
        let source = FixedRoutes(vec![
            (TravelMode::Walking, 2.0, 25.0),
            (TravelMode::Bicycling, 1.5, 8.0),
        ]);

        let result = compare(
            "Home",
            "Work",
            &[TravelMode::Walking, TravelMode::Bicycling],
            &source,
        )
        .await
        .unwrap();

        for candidate in &result.candidates {
            assert_eq!(candidate.co2_kg, 0.0);
        }
        assert_eq!(result.savings_kg, 0.0);
        // co2 tie broken by shorter distance
        assert_eq!(result.recommended_mode, TravelMode::Bicycling);
    }

    #[tokio::test]
    async fn full_tie_keeps_first_requested_mode() {
        let source = FixedRoutes(vec![
            (TravelMode::Walking, 2.0, 25.0),
            (TravelMode::Bicycling, 2.0, 8.0),
        ]);

        let result = compare(
            "Home",
            "Work",
            &[TravelMode::Walking, TravelMode::Bicycling],
            &source,
        )
        .await
        .unwrap();

        assert_eq!(result.recommended_mode, TravelMode::Walking);
    }

    #[tokio::test]
    async fn partial_failure_drops_only_that_mode() {
        let source = FixedRoutes(vec![(TravelMode::Driving, 12.0, 18.0)]);

        let result = compare(
            "Home",
            "Work",
            &[TravelMode::Driving, TravelMode::Transit],
            &source,
        )
        .await
        .unwrap();

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].mode, TravelMode::Driving);
        assert_eq!(result.recommended_mode, TravelMode::Driving);
        assert_eq!(result.savings_kg, 0.0);
    }

    #[tokio::test]
    async fn total_failure_is_an_error() {
        let result = compare(
            "Nowhere",
            "Nowhere Else",
            &[TravelMode::Driving, TravelMode::Transit],
            &NoRoutes,
        )
        .await;

        assert!(matches!(result, Err(RouteError::Resolution { .. })));
    }

    #[tokio::test]
    async fn empty_mode_list_is_rejected() {
        let result = compare("Home", "Work", &[], &NoRoutes).await;
        assert!(matches!(result, Err(RouteError::NoModes)));
    }

    #[tokio::test]
    async fn candidates_keep_caller_order() {
        let source = FixedRoutes(vec![
            (TravelMode::Driving, 10.0, 15.0),
            (TravelMode::Walking, 9.0, 110.0),
            (TravelMode::Transit, 11.0, 22.0),
        ]);

        let result = compare(
            "Home",
            "Work",
            &[TravelMode::Transit, TravelMode::Walking, TravelMode::Driving],
            &source,
        )
        .await
        .unwrap();

        let order: Vec<TravelMode> = result.candidates.iter().map(|c| c.mode).collect();
        assert_eq!(
            order,
            vec![TravelMode::Transit, TravelMode::Walking, TravelMode::Driving]
        );
    }
}
