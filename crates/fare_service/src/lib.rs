//! Collaborator seam and request orchestration around `fare_core`.
//!
//! Geocoding and route planning are external capabilities behind traits;
//! the `ComparisonService` wires them to the quote engine and surfaces the
//! error taxonomy (input resolution vs. route availability vs. estimate
//! preconditions) to the caller.

pub mod geocoder;
pub mod routing;
pub mod service;
