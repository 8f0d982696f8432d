use aina_core::formats::read_feature_collection;
use aina_core::models::{GeographicFeature, LatLon};
use aina_geo::{categorize, Containment};

use crate::dto::{GeographicNamesMetadata, GeographicNamesResponse, Location};
use crate::error::ApiError;
use crate::state::AppState;

/// Place names inside the area's bounding box, grouped by feature class
pub struct GeographicNamesService;

impl GeographicNamesService {
    pub async fn lookup(
        state: &AppState,
        point: LatLon,
    ) -> Result<GeographicNamesResponse, ApiError> {
        let area = &state.config.area.value;
        let path = state.config.gnis_path();

        let sources = read_feature_collection(&path)
            .await
            .map_err(|e| ApiError::source("Failed to fetch geographic names", e))?;

        let resolved: Vec<GeographicFeature> =
            sources.iter().filter_map(GeographicFeature::from_source).collect();
        let parsed = resolved.len();

        let nearby = area.bbox.retain_within(resolved, |f| Some(f.position()));
        tracing::debug!(parsed, nearby = nearby.len(), "Filtered geographic names to area");

        let total = nearby.len();
        let features = categorize(nearby);

        Ok(GeographicNamesResponse {
            location: Location::in_area(point, &area.name),
            counts: features.counts(),
            features,
            metadata: GeographicNamesMetadata {
                source: "USGS Geographic Names Information System (GNIS)".to_string(),
                description: format!(
                    "Geographic features and place names around {}, Oahu",
                    area.name
                ),
                last_updated: "2025".to_string(),
                total_features: total,
            },
        })
    }
}
