//! Canonical geometry types used across all aina crates.
//!
//! Coordinates follow GeoJSON order, `[lon, lat]`. Conversions from the
//! `geojson` crate drop any elevation component.

use serde::{Deserialize, Serialize};

/// A resolved latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a GeoJSON position (`[lon, lat]`)
    pub fn from_position(position: [f64; 2]) -> Self {
        Self { lat: position[1], lon: position[0] }
    }

    /// Whether both components are finite and inside the WGS 84 domain
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// GeoJSON-compatible geometry representation
///
/// This enum directly maps to GeoJSON geometry types with coordinate arrays
/// and serializes back to the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: [f64; 2],
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// Create a Point geometry
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point { coordinates: [lon, lat] }
    }

    /// Create a LineString geometry
    pub fn line_string(coords: Vec<[f64; 2]>) -> Self {
        Geometry::LineString { coordinates: coords }
    }

    /// Create a Polygon geometry
    pub fn polygon(rings: Vec<Vec<[f64; 2]>>) -> Self {
        Geometry::Polygon { coordinates: rings }
    }

    /// Create a MultiPolygon geometry
    pub fn multi_polygon(polygons: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
        Geometry::MultiPolygon { coordinates: polygons }
    }

    /// Representative coordinate used for area filtering.
    ///
    /// Point: the point. Lines: the first vertex. Polygons: the first vertex
    /// of the first ring (of the first polygon). Empty geometries have none.
    pub fn anchor(&self) -> Option<LatLon> {
        let position = match self {
            Geometry::Point { coordinates } => Some(*coordinates),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                coordinates.first().copied()
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                coordinates.first().and_then(|ring| ring.first()).copied()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .first()
                .and_then(|polygon| polygon.first())
                .and_then(|ring| ring.first())
                .copied(),
        };
        position.map(LatLon::from_position)
    }

    /// Convert from a `geojson` crate geometry value.
    ///
    /// Returns `None` for geometry collections and for positions with fewer
    /// than two components.
    pub fn from_geojson(value: &geojson::Value) -> Option<Self> {
        use geojson::Value;

        match value {
            Value::Point(p) => Some(Geometry::Point { coordinates: position(p)? }),
            Value::LineString(line) => Some(Geometry::LineString { coordinates: positions(line)? }),
            Value::MultiPoint(points) => {
                Some(Geometry::MultiPoint { coordinates: positions(points)? })
            }
            Value::Polygon(rings) => Some(Geometry::Polygon { coordinates: rings_of(rings)? }),
            Value::MultiLineString(lines) => {
                Some(Geometry::MultiLineString { coordinates: rings_of(lines)? })
            }
            Value::MultiPolygon(polygons) => Some(Geometry::MultiPolygon {
                coordinates: polygons.iter().map(|p| rings_of(p)).collect::<Option<Vec<_>>>()?,
            }),
            Value::GeometryCollection(_) => None,
        }
    }
}

fn position(p: &[f64]) -> Option<[f64; 2]> {
    match p {
        [lon, lat, ..] => Some([*lon, *lat]),
        _ => None,
    }
}

fn positions(ps: &[Vec<f64>]) -> Option<Vec<[f64; 2]>> {
    ps.iter().map(|p| position(p)).collect()
}

fn rings_of(rings: &[Vec<Vec<f64>>]) -> Option<Vec<Vec<[f64; 2]>>> {
    rings.iter().map(|r| positions(r)).collect()
}
