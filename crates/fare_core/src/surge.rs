//! Surge pricing derived from the demand/supply ratio.

/// The discrete surge ladder. Surge never takes any other value.
pub const SURGE_LEVELS: [f64; 4] = [1.0, 1.2, 1.5, 2.0];

/// Map a (demand, supply) pair to a surge multiplier.
///
/// Zero supply is treated as maximal scarcity and returns 2.0 outright,
/// which also keeps the ratio well-defined. Boundary semantics: demand equal
/// to supply is not scarcity, so a ratio of exactly 1 resolves to 1.0; a
/// ratio of exactly 2 resolves to 2.0.
pub fn surge_multiplier(demand: u32, supply: u32) -> f64 {
    if supply == 0 {
        return 2.0;
    }

    let ratio = demand as f64 / supply as f64;
    if ratio <= 1.0 {
        1.0
    } else if ratio < 1.5 {
        1.2
    } else if ratio < 2.0 {
        1.5
    } else {
        2.0
    }
}
