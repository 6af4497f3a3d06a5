//! Geocoding seam: free-text place names to coordinates.
//!
//! Geocoding failures are client-input errors and must short-circuit before
//! the quote engine runs.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

#[cfg(feature = "nominatim")]
pub mod nominatim;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeError {
    /// The query was empty or whitespace.
    EmptyQuery,
    /// The service returned no result for the query.
    NotFound(String),
    /// HTTP or decoding failure talking to the geocoding service.
    Transport(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::EmptyQuery => write!(f, "location must not be empty"),
            GeocodeError::NotFound(place) => write!(f, "no match for location '{place}'"),
            GeocodeError::Transport(detail) => write!(f, "geocoding request failed: {detail}"),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Resolve a free-text place name to coordinates.
pub trait Geocoder {
    fn resolve(&self, place: &str) -> Result<LatLon, GeocodeError>;
}

/// In-memory geocoder for tests and offline demos. Lookup is
/// case-insensitive on the trimmed place name.
#[derive(Debug, Clone, Default)]
pub struct FixtureGeocoder {
    places: HashMap<String, LatLon>,
}

impl FixtureGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.places.insert(name.trim().to_lowercase(), LatLon::new(lat, lon));
        self
    }
}

impl Geocoder for FixtureGeocoder {
    fn resolve(&self, place: &str) -> Result<LatLon, GeocodeError> {
        let query = place.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }
        self.places
            .get(&query.to_lowercase())
            .copied()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))
    }
}
