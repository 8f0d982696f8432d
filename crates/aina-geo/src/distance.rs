use aina_core::models::LatLon;
use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};

use crate::area::to_point;

/// Great-circle distance between two coordinates in kilometres
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    Haversine.distance(to_point(a), to_point(b)) / 1000.0
}

/// Sum of the distances between consecutive points, in kilometres
pub fn path_length_km(points: &[LatLon]) -> f64 {
    points.windows(2).map(|pair| haversine_km(pair[0], pair[1])).sum()
}

/// Latitude/longitude envelope of a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// None for an empty set
    pub fn from_points(points: &[LatLon]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lon: first.lon,
            max_lon: first.lon,
        };

        Some(points.iter().skip(1).fold(init, |b, p| Bounds {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lon: b.min_lon.min(p.lon),
            max_lon: b.max_lon.max(p.lon),
        }))
    }
}
