use serde::{Deserialize, Serialize};

use super::geometry::{Geometry, LatLon};
use crate::formats::SourceFeature;

/// Evacuation tier of a tsunami zone code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneTier {
    /// Code 1: evacuate for any tsunami warning
    Evacuation,
    /// Code 2: evacuate for extreme tsunami warnings
    Extreme,
    /// Code 3: safe area to evacuate to
    Safe,
    Unclassified,
}

impl ZoneTier {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ZoneTier::Evacuation,
            2 => ZoneTier::Extreme,
            3 => ZoneTier::Safe,
            _ => ZoneTier::Unclassified,
        }
    }
}

/// A tsunami evacuation zone polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TsunamiZone {
    pub objectid: i64,
    pub zone_code: i64,
    pub zone_type: String,
    pub zone_desc: String,
    pub areausac: f64,
    pub geometry: Geometry,
}

impl TsunamiZone {
    /// Interpret a source feature.
    ///
    /// Skipped when properties or geometry are missing, or when `objectid`,
    /// `zone_code` or `zone_type` is absent. `zone_code` may be a number or a
    /// numeric string.
    pub fn from_source(source: &SourceFeature) -> Option<Self> {
        let props = source.properties.as_ref()?;
        let geometry = source.geometry.clone()?;

        let objectid = props.i64("objectid")?;
        if !props.contains("zone_code") {
            return None;
        }
        let zone_code = props.i64("zone_code").unwrap_or(0);
        let zone_type = props.string("zone_type")?;

        Some(Self {
            objectid,
            zone_code,
            zone_type,
            zone_desc: props.string_or_default("zone_desc"),
            areausac: props.f64_or("areausac", 0.0),
            geometry,
        })
    }

    pub fn tier(&self) -> ZoneTier {
        ZoneTier::from_code(self.zone_code)
    }

    /// First coordinate of the first ring
    pub fn anchor(&self) -> Option<LatLon> {
        self.geometry.anchor()
    }
}
