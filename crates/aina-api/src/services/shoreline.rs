use aina_core::formats::parse_feature_collection;
use aina_core::models::{LatLon, ShorelinePoint};
use aina_geo::{path_length_km, Bounds};

use crate::dto::{Location, ShorelineMetadata, ShorelineResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Public access points along the Waimanalo shoreline, objectid 46 to 57
const SHORELINE_ACCESS: &str = include_str!("../../data/shoreline_public_access.geojson");

/// Shoreline access points from the bundled dataset
pub struct ShorelineService;

impl ShorelineService {
    pub fn points() -> Result<Vec<ShorelinePoint>, ApiError> {
        let sources = parse_feature_collection("shoreline_public_access.geojson", SHORELINE_ACCESS)
            .map_err(|e| ApiError::source("Failed to fetch shoreline data", e))?;

        Ok(sources.iter().filter_map(ShorelinePoint::from_source).collect())
    }

    pub fn lookup(state: &AppState, point: LatLon) -> Result<ShorelineResponse, ApiError> {
        let points = Self::points()?;
        let positions: Vec<LatLon> = points.iter().map(|p| LatLon::new(p.lat, p.lon)).collect();

        Ok(ShorelineResponse {
            location: Location::in_area(point, &state.config.area.value.name),
            bounds: Bounds::from_points(&positions),
            metadata: ShorelineMetadata {
                source: "Shoreline Public Access Data".to_string(),
                description: "Waimanalo Shoreline Public Access Points".to_string(),
                last_updated: "2025".to_string(),
                data_url: "Local GeoJSON Data".to_string(),
                total_points: points.len(),
                shoreline_length: path_length_km(&positions),
            },
            shoreline_points: points,
        })
    }
}
