//! Nominatim-backed geocoder, enabled via the `nominatim` feature.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::{GeocodeError, Geocoder, LatLon};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = "fare-compare-sim";

#[derive(Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Thin HTTP client for the Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

impl NominatimGeocoder {
    /// Create a client for the given Nominatim endpoint.
    pub fn new(endpoint: &str) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Client against the public OpenStreetMap instance.
    pub fn public() -> Result<Self, GeocodeError> {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, place: &str) -> Result<LatLon, GeocodeError> {
        let query = place.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = format!("{}/search", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .map_err(|err| GeocodeError::Transport(err.to_string()))?;
        let hit = places
            .first()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

        let lat = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::Transport(format!("non-numeric latitude '{}'", hit.lat)))?;
        let lon = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::Transport(format!("non-numeric longitude '{}'", hit.lon)))?;
        Ok(LatLon::new(lat, lon))
    }
}
