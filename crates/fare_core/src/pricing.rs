//! Fare formula: flat fare plus distance term, scaled by surge.

/// Round a currency amount to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Fare for a trip, rounded to 2 decimal places.
///
/// Formula: `(base_fare + time_increment + per_km_rate * distance_m / 1000) * surge`
///
/// The time increment joins the base fare before the per-km term and before
/// surge is applied, so surge multiplies the whole fare including the
/// time-of-day premium. The ordering is part of the pricing contract;
/// swapping it changes the numbers.
pub fn price(
    distance_m: f64,
    base_fare: f64,
    per_km_rate: f64,
    surge: f64,
    time_increment: f64,
) -> f64 {
    let distance_km = distance_m / 1000.0;
    round2((base_fare + time_increment + per_km_rate * distance_km) * surge)
}
