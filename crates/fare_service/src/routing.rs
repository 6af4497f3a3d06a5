//! Route planning seam and a synthetic street-grid planner for offline use.
//!
//! Routing failures are computation errors and must short-circuit before the
//! quote engine runs.

use std::fmt;

use pathfinding::prelude::dijkstra;

use crate::geocoder::LatLon;

/// Meters per degree of latitude (spherical approximation).
const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// A driving route between two resolved coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub distance_m: f64,
    pub polyline: Vec<LatLon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// No path between the endpoints.
    Unreachable,
    /// The destination lies outside the planner's network extent.
    OutOfBounds,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unreachable => write!(f, "no route between the given locations"),
            RouteError::OutOfBounds => {
                write!(f, "destination is outside the routable area")
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Compute the shortest driving path between two coordinates.
pub trait RoutePlanner {
    fn shortest_path(&self, origin: LatLon, destination: LatLon) -> Result<Route, RouteError>;
}

/// Synthetic Manhattan street grid centered on the route origin.
///
/// Stands in for a real road network in tests and offline demos; the path
/// search itself is delegated to `pathfinding`'s Dijkstra, mirroring how a
/// real network would be queried.
#[derive(Debug, Clone)]
pub struct GridRoutePlanner {
    /// Block edge length in meters.
    spacing_m: f64,
    /// Half-width of the routable square around the origin, in meters.
    max_extent_m: f64,
}

impl Default for GridRoutePlanner {
    fn default() -> Self {
        // 250 m blocks, 7 km routable radius around the origin.
        Self::new(250.0, 7_000.0)
    }
}

impl GridRoutePlanner {
    pub fn new(spacing_m: f64, max_extent_m: f64) -> Self {
        Self {
            spacing_m,
            max_extent_m,
        }
    }

    fn meters_per_deg_lon(origin: LatLon) -> f64 {
        METERS_PER_DEG_LAT * origin.lat.to_radians().cos()
    }

    /// Snap a point to grid coordinates relative to the origin anchor.
    fn to_cell(&self, origin: LatLon, point: LatLon) -> (i64, i64) {
        let dy_m = (point.lat - origin.lat) * METERS_PER_DEG_LAT;
        let dx_m = (point.lon - origin.lon) * Self::meters_per_deg_lon(origin);
        (
            (dx_m / self.spacing_m).round() as i64,
            (dy_m / self.spacing_m).round() as i64,
        )
    }

    fn to_latlon(&self, origin: LatLon, cell: (i64, i64)) -> LatLon {
        let dx_m = cell.0 as f64 * self.spacing_m;
        let dy_m = cell.1 as f64 * self.spacing_m;
        LatLon::new(
            origin.lat + dy_m / METERS_PER_DEG_LAT,
            origin.lon + dx_m / Self::meters_per_deg_lon(origin),
        )
    }
}

impl RoutePlanner for GridRoutePlanner {
    fn shortest_path(&self, origin: LatLon, destination: LatLon) -> Result<Route, RouteError> {
        let goal = self.to_cell(origin, destination);
        let extent = (self.max_extent_m / self.spacing_m).ceil() as i64;
        if goal.0.abs() > extent || goal.1.abs() > extent {
            return Err(RouteError::OutOfBounds);
        }

        // Edge cost in centimeters so Dijkstra works on integer weights.
        let step_cost = (self.spacing_m * 100.0).round() as u64;
        let (path, cost) = dijkstra(
            &(0i64, 0i64),
            |&(x, y)| {
                [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                    .into_iter()
                    .filter(|&(nx, ny)| nx.abs() <= extent && ny.abs() <= extent)
                    .map(|next| (next, step_cost))
                    .collect::<Vec<_>>()
            },
            |&node| node == goal,
        )
        .ok_or(RouteError::Unreachable)?;

        let polyline = path
            .into_iter()
            .map(|cell| self.to_latlon(origin, cell))
            .collect();
        Ok(Route {
            distance_m: cost as f64 / 100.0,
            polyline,
        })
    }
}
