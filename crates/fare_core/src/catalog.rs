//! Fixed provider and vehicle catalogs with their pricing/market tables.
//!
//! The per-provider and per-vehicle constants are policy, not physics, so
//! they live in a configuration table that can be tuned or extended without
//! touching the quote pipeline.

use serde::Serialize;

/// Simulated ride-hailing brand, as a generic pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Provider {
    /// Low-cost tier: cheapest, most eager to accept.
    Budget,
    /// Mid tier.
    Standard,
    /// Premium tier.
    Premium,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Budget, Provider::Standard, Provider::Premium];

    pub fn name(self) -> &'static str {
        match self {
            Provider::Budget => "Budget",
            Provider::Standard => "Standard",
            Provider::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VehicleType {
    Bike,
    Auto,
    Car,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Bike, VehicleType::Auto, VehicleType::Car];

    pub fn name(self) -> &'static str {
        match self {
            VehicleType::Bike => "Bike",
            VehicleType::Auto => "Auto",
            VehicleType::Car => "Car",
        }
    }
}

/// Pricing and market adjustments for one provider tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderProfile {
    /// Applied to the vehicle fare after surge.
    pub price_multiplier: f64,
    /// Added to the base acceptance probability (percentage points).
    pub probability_delta: f64,
    /// Added to the base pickup ETA (minutes).
    pub eta_delta_min: i32,
}

/// Rates and market adjustments for one vehicle type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleProfile {
    /// Flat fare component in currency units.
    pub base_fare: f64,
    /// Per-kilometer rate in currency units.
    pub per_km_rate: f64,
    /// Added to the base acceptance probability (percentage points).
    pub probability_delta: f64,
    /// Added to the base pickup ETA (minutes).
    pub eta_delta_min: i32,
}

/// Adjustment and rate tables for the fixed {provider} x {vehicle} catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    providers: [ProviderProfile; 3],
    vehicles: [VehicleProfile; 3],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            providers: [
                // Budget: cheapest, accepts eagerly, arrives fastest.
                ProviderProfile {
                    price_multiplier: 1.0,
                    probability_delta: 15.0,
                    eta_delta_min: -3,
                },
                // Standard: mid price, most likely to bail on a request.
                ProviderProfile {
                    price_multiplier: 1.2,
                    probability_delta: -10.0,
                    eta_delta_min: 3,
                },
                // Premium: priciest, reliable.
                ProviderProfile {
                    price_multiplier: 1.3,
                    probability_delta: 5.0,
                    eta_delta_min: -1,
                },
            ],
            vehicles: [
                VehicleProfile {
                    base_fare: 10.0,
                    per_km_rate: 4.0,
                    probability_delta: 0.0,
                    eta_delta_min: 0,
                },
                VehicleProfile {
                    base_fare: 20.0,
                    per_km_rate: 6.0,
                    probability_delta: -10.0,
                    eta_delta_min: 2,
                },
                VehicleProfile {
                    base_fare: 30.0,
                    per_km_rate: 8.0,
                    probability_delta: 20.0,
                    eta_delta_min: -2,
                },
            ],
        }
    }
}

impl Catalog {
    pub fn provider(&self, provider: Provider) -> &ProviderProfile {
        &self.providers[provider as usize]
    }

    pub fn vehicle(&self, vehicle: VehicleType) -> &VehicleProfile {
        &self.vehicles[vehicle as usize]
    }

    /// Iterate the provider catalog in its fixed order.
    pub fn providers(&self) -> impl Iterator<Item = (Provider, &ProviderProfile)> + '_ {
        Provider::ALL.iter().map(|p| (*p, self.provider(*p)))
    }

    /// Iterate the vehicle catalog in its fixed order.
    pub fn vehicles(&self) -> impl Iterator<Item = (VehicleType, &VehicleProfile)> + '_ {
        VehicleType::ALL.iter().map(|v| (*v, self.vehicle(*v)))
    }

    /// Override one provider's profile.
    pub fn with_provider_profile(mut self, provider: Provider, profile: ProviderProfile) -> Self {
        self.providers[provider as usize] = profile;
        self
    }

    /// Override one vehicle's profile.
    pub fn with_vehicle_profile(mut self, vehicle: VehicleType, profile: VehicleProfile) -> Self {
        self.vehicles[vehicle as usize] = profile;
        self
    }
}
