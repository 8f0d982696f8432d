use serde::{Deserialize, Serialize};

use crate::formats::{Properties, SourceFeature};

/// Access point classification derived from the point's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShorelineType {
    BeachPark,
    AccessPoint,
    #[default]
    Access,
}

impl ShorelineType {
    /// "Beach Park" in the name wins over "Laumilo"; anything else is plain access
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.contains("Beach Park") => ShorelineType::BeachPark,
            Some(n) if n.contains("Laumilo") => ShorelineType::AccessPoint,
            _ => ShorelineType::Access,
        }
    }
}

/// Amenity and ownership details of a shoreline access point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShorelineProperties {
    pub parcel_owner: Option<String>,
    pub parcel_operator: Option<String>,
    pub access_type: Option<String>,
    pub access_surface: Option<String>,
    pub dedicated_area: Option<f64>,
    pub shore_type: Option<String>,
    pub restroom: Option<String>,
    pub showers: Option<String>,
    pub picnic_facilities: Option<String>,
    pub trash_receptacles: Option<String>,
    pub water: Option<String>,
    pub phone: Option<String>,
    pub lifeguard: Option<String>,
    pub sign_words: Option<String>,
}

impl ShorelineProperties {
    fn from_properties(props: &Properties) -> Self {
        let text = |key: &str| props.raw(key).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            parcel_owner: text("parcel_own"),
            parcel_operator: text("parcel_ope"),
            access_type: text("access_typ"),
            access_surface: text("access_sur"),
            dedicated_area: props.raw("dedicated_").and_then(|v| v.as_f64()),
            shore_type: text("shore_type"),
            restroom: text("restroom"),
            showers: text("showers"),
            picnic_facilities: text("picnic_fac"),
            trash_receptacles: text("trash_rece"),
            water: text("water"),
            phone: text("phone"),
            lifeguard: text("lifeguard"),
            sign_words: text("sign_word"),
        }
    }
}

/// A public shoreline access point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShorelinePoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    #[serde(rename = "type")]
    pub point_type: ShorelineType,
    pub name: Option<String>,
    pub properties: ShorelineProperties,
}

impl ShorelinePoint {
    /// Interpret a source feature; points without a geometry are skipped
    pub fn from_source(source: &SourceFeature) -> Option<Self> {
        let position = source.geometry.as_ref()?.anchor()?;
        let props = source.properties.clone().unwrap_or_default();
        let name = props.raw("name").and_then(|v| v.as_str()).map(str::to_string);

        Some(Self {
            lat: position.lat,
            lon: position.lon,
            elevation: Some(0.0),
            point_type: ShorelineType::from_name(name.as_deref()),
            name,
            properties: ShorelineProperties::from_properties(&props),
        })
    }
}
