//! Driver-market simulation: randomized demand/supply and the per-pair
//! probability/ETA adjustments layered on top of a shared base draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{Catalog, Provider, VehicleType};
use crate::timeband::TimeBand;

/// Inclusive bounds for the rider-demand draw.
pub const DEMAND_RANGE: (u32, u32) = (50, 120);
/// Inclusive bounds for the driver-supply draw.
pub const SUPPLY_RANGE: (u32, u32) = (30, 100);

/// Acceptance probability is always reported within these bounds (percent).
pub const MIN_PROBABILITY: u32 = 10;
pub const MAX_PROBABILITY: u32 = 99;
/// Pickup ETA floor in minutes.
pub const MIN_ETA_MIN: u32 = 2;

/// Shared market conditions for one estimate request.
///
/// Drawn exactly once per request so every quote in the response reflects
/// the same scarcity conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketSnapshot {
    pub band: TimeBand,
    pub demand: u32,
    pub supply: u32,
    /// Driver availability for the band, percent.
    pub availability_percent: u32,
    /// Band-level acceptance probability before per-pair deltas. Kept
    /// real-valued; truncation to integer happens at the clamp boundary.
    pub base_probability: f64,
    /// Band-level pickup ETA before per-pair deltas, minutes.
    pub base_eta_min: u32,
}

/// Final probability/ETA for one (provider, vehicle) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketAdjustment {
    /// Acceptance probability, percent, clamped to [10, 99].
    pub probability: u32,
    /// Pickup ETA in minutes, at least 2.
    pub eta_min: u32,
}

impl MarketSnapshot {
    /// Apply the vehicle delta, then the provider delta, then clamp.
    ///
    /// Layering additive deltas over the shared base keeps each quote
    /// explainable as base + vehicle + provider instead of a 9-entry lookup
    /// table.
    pub fn adjust(
        &self,
        vehicle: VehicleType,
        provider: Provider,
        catalog: &Catalog,
    ) -> MarketAdjustment {
        let v = catalog.vehicle(vehicle);
        let p = catalog.provider(provider);

        let probability = self.base_probability + v.probability_delta + p.probability_delta;
        let probability =
            (probability.trunc() as i64).clamp(MIN_PROBABILITY as i64, MAX_PROBABILITY as i64);

        let eta = self.base_eta_min as i64 + v.eta_delta_min as i64 + p.eta_delta_min as i64;
        let eta = eta.max(MIN_ETA_MIN as i64);

        MarketAdjustment {
            probability: probability as u32,
            eta_min: eta as u32,
        }
    }
}

/// Draws the per-request market snapshot from its own RNG.
#[derive(Debug)]
pub struct MarketSimulator {
    rng: StdRng,
}

impl MarketSimulator {
    /// Seeded simulator for reproducible estimates (tests, replays).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Entropy-seeded simulator for live requests.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw the shared demand/supply signal and the band-level base stats.
    pub fn simulate(&mut self, band: TimeBand) -> MarketSnapshot {
        let demand = self.rng.gen_range(DEMAND_RANGE.0..=DEMAND_RANGE.1);
        let supply = self.rng.gen_range(SUPPLY_RANGE.0..=SUPPLY_RANGE.1);

        let (avail_lo, avail_hi) = band.availability_range();
        let availability_percent = self.rng.gen_range(avail_lo..=avail_hi);

        let (prob_lo, prob_hi) = band.probability_range();
        let base_probability = self.rng.gen_range(prob_lo as f64..=prob_hi as f64);

        let (eta_lo, eta_hi) = band.eta_range();
        let base_eta_min = self.rng.gen_range(eta_lo..=eta_hi);

        MarketSnapshot {
            band,
            demand,
            supply,
            availability_percent,
            base_probability,
            base_eta_min,
        }
    }
}
