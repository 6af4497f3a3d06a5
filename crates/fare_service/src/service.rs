//! Request orchestration: geocode both ends, route, then build the estimate.

use std::fmt;

use fare_core::estimate::{EstimateError, QuoteAggregator, RideEstimateResult};
use serde::Serialize;

use crate::geocoder::{GeocodeError, Geocoder, LatLon};
use crate::routing::{RouteError, RoutePlanner};

/// Service-level error taxonomy. The class distinction matters to callers:
/// input resolution is the client's fault, route availability and estimate
/// preconditions are ours.
#[derive(Debug)]
pub enum ComparisonError {
    /// Geocoding failed; the core was never invoked.
    InputResolution(GeocodeError),
    /// No usable route; the core was never invoked.
    RouteUnavailable(RouteError),
    /// The core rejected its inputs.
    Estimate(EstimateError),
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::InputResolution(err) => write!(f, "invalid location input: {err}"),
            ComparisonError::RouteUnavailable(err) => write!(f, "route unavailable: {err}"),
            ComparisonError::Estimate(err) => write!(f, "estimate failed: {err}"),
        }
    }
}

impl std::error::Error for ComparisonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComparisonError::InputResolution(err) => Some(err),
            ComparisonError::RouteUnavailable(err) => Some(err),
            ComparisonError::Estimate(err) => Some(err),
        }
    }
}

/// Full payload returned to the caller: the core estimate plus the route
/// polyline and the resolved endpoint coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResponse {
    #[serde(flatten)]
    pub estimate: RideEstimateResult,
    pub path: Vec<LatLon>,
    pub start: LatLon,
    pub end: LatLon,
}

/// Wires the external collaborators around the quote engine. Each `compare`
/// call is an independent request; no state is carried over besides the
/// aggregator's RNG position.
#[derive(Debug)]
pub struct ComparisonService<G, R> {
    geocoder: G,
    planner: R,
    aggregator: QuoteAggregator,
}

impl<G: Geocoder, R: RoutePlanner> ComparisonService<G, R> {
    pub fn new(geocoder: G, planner: R, aggregator: QuoteAggregator) -> Self {
        Self {
            geocoder,
            planner,
            aggregator,
        }
    }

    /// Compare fares between two free-text locations at the given hour.
    pub fn compare(
        &mut self,
        pickup: &str,
        drop: &str,
        hour: u8,
    ) -> Result<ComparisonResponse, ComparisonError> {
        let start = self
            .geocoder
            .resolve(pickup)
            .map_err(ComparisonError::InputResolution)?;
        let end = self
            .geocoder
            .resolve(drop)
            .map_err(ComparisonError::InputResolution)?;

        let route = self
            .planner
            .shortest_path(start, end)
            .map_err(ComparisonError::RouteUnavailable)?;

        let estimate = self
            .aggregator
            .build_estimate(route.distance_m, hour)
            .map_err(ComparisonError::Estimate)?;

        Ok(ComparisonResponse {
            estimate,
            path: route.polyline,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocoder::FixtureGeocoder;
    use crate::routing::GridRoutePlanner;
    use fare_core::market::MarketSimulator;

    fn service(seed: u64) -> ComparisonService<FixtureGeocoder, GridRoutePlanner> {
        let geocoder = FixtureGeocoder::new()
            .with_place("Central Station", 52.5251, 13.3694)
            .with_place("Old Town", 52.5170, 13.4030)
            .with_place("Lost City", 55.0000, 13.4050);
        ComparisonService::new(
            geocoder,
            GridRoutePlanner::default(),
            QuoteAggregator::new(MarketSimulator::from_seed(seed)),
        )
    }

    #[test]
    fn unknown_pickup_short_circuits_as_input_error() {
        let mut svc = service(1);
        let err = svc.compare("Nowhere", "Old Town", 12).unwrap_err();
        assert!(matches!(err, ComparisonError::InputResolution(_)));
    }

    #[test]
    fn unroutable_drop_is_a_route_error() {
        let mut svc = service(1);
        let err = svc.compare("Central Station", "Lost City", 12).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::RouteUnavailable(RouteError::OutOfBounds)
        ));
    }

    #[test]
    fn bad_hour_is_an_estimate_error() {
        let mut svc = service(1);
        let err = svc.compare("Central Station", "Old Town", 24).unwrap_err();
        assert!(matches!(err, ComparisonError::Estimate(_)));
    }

    #[test]
    fn successful_comparison_carries_route_and_endpoints() {
        let mut svc = service(8);
        let response = svc.compare("Central Station", "Old Town", 18).expect("compare");

        assert_eq!(response.start, LatLon::new(52.5251, 13.3694));
        assert_eq!(response.end, LatLon::new(52.5170, 13.4030));
        assert!(response.path.len() >= 2);
        assert_eq!(response.path[0], response.start);
        assert!(response.estimate.distance_km > 0.0);
        assert_eq!(response.estimate.quotes.len(), 3);
    }
}
