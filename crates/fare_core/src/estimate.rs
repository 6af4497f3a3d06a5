//! Quote aggregation: one shared market draw fanned out across the
//! provider x vehicle catalog.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::catalog::{Catalog, Provider, VehicleType};
use crate::market::MarketSimulator;
use crate::pricing::{price, round2};
use crate::surge::surge_multiplier;
use crate::timeband::TimeBand;

/// Precondition violations on the aggregator inputs. These indicate an
/// upstream bug (distance and hour come from the collaborators), so the
/// aggregator fails fast instead of clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    NegativeDistance(f64),
    NonFiniteDistance,
    HourOutOfRange(u8),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::NegativeDistance(d) => write!(f, "distance must be non-negative, got {d}"),
            EstimateError::NonFiniteDistance => write!(f, "distance must be finite"),
            EstimateError::HourOutOfRange(h) => write!(f, "hour must be in 0..=23, got {h}"),
        }
    }
}

impl std::error::Error for EstimateError {}

/// Price / ETA / acceptance estimate for one (provider, vehicle) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// Currency units, 2 decimal places.
    pub price: f64,
    /// Pickup ETA in minutes, at least 2.
    pub eta_min: u32,
    /// Acceptance probability in percent, within [10, 99].
    pub acceptance_probability: u32,
}

/// Full response for one estimate request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideEstimateResult {
    /// Trip distance in kilometers, 2 decimal places.
    pub distance_km: f64,
    pub demand: u32,
    pub supply: u32,
    pub surge: f64,
    /// Label of the time band the request fell into.
    pub time_band: &'static str,
    /// Driver-availability label for the band.
    pub availability: &'static str,
    pub availability_percent: u32,
    pub quotes: BTreeMap<Provider, BTreeMap<VehicleType, Quote>>,
}

/// Builds the full quote set for one request. Owns the transient computation
/// state; nothing is retained between calls besides the RNG position.
#[derive(Debug)]
pub struct QuoteAggregator {
    catalog: Catalog,
    market: MarketSimulator,
}

impl QuoteAggregator {
    pub fn new(market: MarketSimulator) -> Self {
        Self {
            catalog: Catalog::default(),
            market,
        }
    }

    /// Replace the default catalog tables.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Compute the full estimate for a trip of `distance_m` meters at the
    /// given wall-clock hour.
    ///
    /// The market draw happens exactly once, before the per-pair loop, so
    /// all nine quotes share the same demand/supply/base conditions.
    pub fn build_estimate(
        &mut self,
        distance_m: f64,
        hour: u8,
    ) -> Result<RideEstimateResult, EstimateError> {
        if !distance_m.is_finite() {
            return Err(EstimateError::NonFiniteDistance);
        }
        if distance_m < 0.0 {
            return Err(EstimateError::NegativeDistance(distance_m));
        }
        if hour > 23 {
            return Err(EstimateError::HourOutOfRange(hour));
        }

        let band = TimeBand::for_hour(hour);
        let increment = band.fare_increment();
        let snapshot = self.market.simulate(band);
        let surge = surge_multiplier(snapshot.demand, snapshot.supply);

        let mut quotes = BTreeMap::new();
        for (provider, profile) in self.catalog.providers() {
            let mut per_vehicle = BTreeMap::new();
            for (vehicle, rates) in self.catalog.vehicles() {
                let vehicle_fare =
                    price(distance_m, rates.base_fare, rates.per_km_rate, surge, increment);
                let adjusted = snapshot.adjust(vehicle, provider, &self.catalog);
                per_vehicle.insert(
                    vehicle,
                    Quote {
                        price: round2(vehicle_fare * profile.price_multiplier),
                        eta_min: adjusted.eta_min,
                        acceptance_probability: adjusted.probability,
                    },
                );
            }
            quotes.insert(provider, per_vehicle);
        }

        Ok(RideEstimateResult {
            distance_km: round2(distance_m / 1000.0),
            demand: snapshot.demand,
            supply: snapshot.supply,
            surge,
            time_band: band.label(),
            availability: band.availability(),
            availability_percent: snapshot.availability_percent,
            quotes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{MAX_PROBABILITY, MIN_ETA_MIN, MIN_PROBABILITY};
    use crate::surge::SURGE_LEVELS;

    fn aggregator(seed: u64) -> QuoteAggregator {
        QuoteAggregator::new(MarketSimulator::from_seed(seed))
    }

    #[test]
    fn rejects_invalid_inputs() {
        let mut agg = aggregator(1);
        assert_eq!(
            agg.build_estimate(-1.0, 12),
            Err(EstimateError::NegativeDistance(-1.0))
        );
        assert_eq!(
            agg.build_estimate(f64::NAN, 12),
            Err(EstimateError::NonFiniteDistance)
        );
        assert_eq!(
            agg.build_estimate(5000.0, 24),
            Err(EstimateError::HourOutOfRange(24))
        );
    }

    #[test]
    fn produces_a_quote_for_every_catalog_pair() {
        let mut agg = aggregator(3);
        let result = agg.build_estimate(5000.0, 18).expect("estimate");
        assert_eq!(result.quotes.len(), 3);
        for per_vehicle in result.quotes.values() {
            assert_eq!(per_vehicle.len(), 3);
        }
    }

    #[test]
    fn identical_seeds_give_identical_estimates() {
        let mut a = aggregator(99);
        let mut b = aggregator(99);
        for hour in [0, 7, 12, 17, 22] {
            let left = a.build_estimate(4200.0, hour).expect("estimate");
            let right = b.build_estimate(4200.0, hour).expect("estimate");
            assert_eq!(left, right);
        }
    }

    #[test]
    fn all_quotes_share_the_same_market_conditions() {
        // Seeded run: the surge/demand/supply in the result must be a single
        // draw, so every provider's price ratio to Budget equals its price
        // multiplier exactly.
        let mut agg = aggregator(11);
        let result = agg.build_estimate(8000.0, 12).expect("estimate");

        assert!(SURGE_LEVELS.contains(&result.surge));
        let budget = &result.quotes[&Provider::Budget];
        let standard = &result.quotes[&Provider::Standard];
        let premium = &result.quotes[&Provider::Premium];
        for vehicle in VehicleType::ALL {
            let base = budget[&vehicle].price;
            assert!((standard[&vehicle].price - round2(base * 1.2)).abs() < 0.011);
            assert!((premium[&vehicle].price - round2(base * 1.3)).abs() < 0.011);
        }
    }

    #[test]
    fn quote_bounds_hold_for_every_pair() {
        let mut agg = aggregator(5);
        for hour in 0..24u8 {
            let result = agg.build_estimate(3000.0, hour).expect("estimate");
            for per_vehicle in result.quotes.values() {
                for quote in per_vehicle.values() {
                    assert!(quote.price > 0.0);
                    assert!(quote.eta_min >= MIN_ETA_MIN);
                    assert!(
                        (MIN_PROBABILITY..=MAX_PROBABILITY).contains(&quote.acceptance_probability)
                    );
                }
            }
        }
    }

    #[test]
    fn zero_distance_trip_prices_the_flat_fare() {
        let mut agg = aggregator(21);
        let result = agg.build_estimate(0.0, 17).expect("estimate");
        assert_eq!(result.distance_km, 0.0);
        // Evening peak has no increment, so the Budget/Bike quote is exactly
        // the bike base fare times surge.
        let bike = result.quotes[&Provider::Budget][&VehicleType::Bike];
        assert_eq!(bike.price, round2(10.0 * result.surge));
    }

    #[test]
    fn distance_is_reported_in_rounded_km() {
        let mut agg = aggregator(2);
        let result = agg.build_estimate(5678.0, 12).expect("estimate");
        assert_eq!(result.distance_km, 5.68);
    }

    #[test]
    fn serializes_as_a_nested_provider_vehicle_map() {
        let mut agg = aggregator(13);
        let result = agg.build_estimate(2500.0, 9).expect("estimate");
        let json = serde_json::to_value(&result).expect("serialize");

        assert!(json["distance_km"].is_number());
        assert_eq!(json["time_band"], "Morning Peak");
        let quote = &json["quotes"]["Budget"]["Bike"];
        assert!(quote["price"].is_number());
        assert!(quote["eta_min"].is_number());
        assert!(quote["acceptance_probability"].is_number());
    }
}
