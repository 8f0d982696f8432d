use serde::{Deserialize, Serialize};

use super::geometry::LatLon;

/// Axis-aligned latitude/longitude rectangle, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self { lat_min: 21.32, lat_max: 21.36, lon_min: -157.75, lon_max: -157.65 }
    }
}

/// Circle in plain degree space around a center point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusArea {
    pub center: LatLon,
    pub max_distance_deg: f64,
}

impl Default for RadiusArea {
    fn default() -> Self {
        Self { center: WAIMANALO, max_distance_deg: 0.5 }
    }
}

/// Reference point of Waimanalo, Oahu
pub const WAIMANALO: LatLon = LatLon { lat: 21.33861, lon: -157.70005 };

/// The fixed area the service reports on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOfInterest {
    pub name: String,
    pub reference: LatLon,
    pub bbox: BoundingBox,
    pub radius: RadiusArea,
}

impl Default for AreaOfInterest {
    fn default() -> Self {
        Self {
            name: "Waimanalo".to_string(),
            reference: WAIMANALO,
            bbox: BoundingBox::default(),
            radius: RadiusArea::default(),
        }
    }
}
