use aina_core::models::{LatLon, LocationMetrics, ShorelinePoint, Suitability, TsunamiZone};
use aina_geo::{Bounds, CategorizedFeatures, CategoryCounts};
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            service: "aina-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Echo of the requested coordinate
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl Location {
    pub fn new(point: LatLon) -> Self {
        Self { lat: point.lat, lon: point.lon, area: None }
    }

    pub fn in_area(point: LatLon, area: &str) -> Self {
        Self { area: Some(area.to_string()), ..Self::new(point) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographicNamesMetadata {
    pub source: String,
    pub description: String,
    pub last_updated: String,
    pub total_features: usize,
}

#[derive(Debug, Serialize)]
pub struct GeographicNamesResponse {
    pub location: Location,
    pub features: CategorizedFeatures,
    pub counts: CategoryCounts,
    pub metadata: GeographicNamesMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilTaxonomy {
    pub order: String,
    pub suborder: String,
    pub great_group: String,
    pub subgroup: String,
}

#[derive(Debug, Serialize)]
pub struct SoilSuitability {
    pub agricultural: Suitability,
    pub drainage: String,
    pub erosion: String,
}

#[derive(Debug, Serialize)]
pub struct PhysicalProperties {
    pub texture: String,
    pub slope: String,
    pub depth: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilMetadata {
    pub source: String,
    pub description: String,
    pub last_updated: String,
    pub matched_records: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilResponse {
    pub location: Location,
    pub soil_series: String,
    pub drainage_class: String,
    pub hydrologic_group: String,
    pub erosion_factor: String,
    pub organic_matter: String,
    pub ph_level: String,
    pub soil_taxonomy: SoilTaxonomy,
    pub suitability: SoilSuitability,
    pub physical_properties: PhysicalProperties,
    pub metadata: SoilMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShorelineMetadata {
    pub source: String,
    pub description: String,
    pub last_updated: String,
    pub data_url: String,
    pub total_points: usize,
    /// Kilometres along the points in listed order
    pub shoreline_length: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShorelineResponse {
    pub location: Location,
    pub shoreline_points: Vec<ShorelinePoint>,
    pub bounds: Option<Bounds>,
    pub metadata: ShorelineMetadata,
}

/// Zone counts per evacuation tier
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneSummary {
    pub evacuation: usize,
    pub extreme: usize,
    pub safe: usize,
    pub unclassified: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiMetadata {
    pub source: String,
    pub description: String,
    pub last_updated: String,
    pub total_zones: usize,
}

#[derive(Debug, Serialize)]
pub struct TsunamiResponse {
    pub location: Location,
    pub zones: Vec<TsunamiZone>,
    pub summary: ZoneSummary,
    pub metadata: TsunamiMetadata,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub locations: Vec<LocationMetrics>,
}
