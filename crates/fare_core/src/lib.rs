//! Fare comparison engine: deterministic-given-inputs pricing that turns
//! (distance, hour of day, randomized demand/supply) into per-provider,
//! per-vehicle price / ETA / acceptance-probability quotes.

pub mod catalog;
pub mod estimate;
pub mod market;
pub mod pricing;
pub mod surge;
pub mod timeband;
