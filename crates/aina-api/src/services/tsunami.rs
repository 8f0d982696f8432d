use aina_core::formats::read_feature_collection;
use aina_core::models::{LatLon, TsunamiZone, ZoneTier};
use aina_geo::Containment;

use crate::dto::{Location, TsunamiMetadata, TsunamiResponse, ZoneSummary};
use crate::error::ApiError;
use crate::state::AppState;

/// Evacuation zones whose first ring starts within the area radius
pub struct TsunamiService;

impl TsunamiService {
    pub async fn lookup(state: &AppState, point: LatLon) -> Result<TsunamiResponse, ApiError> {
        let area = &state.config.area.value;
        let path = state.config.tsunami_path();

        let sources = read_feature_collection(&path)
            .await
            .map_err(|e| ApiError::source("Failed to process tsunami evacuation zones", e))?;

        let zones: Vec<TsunamiZone> = sources.iter().filter_map(TsunamiZone::from_source).collect();
        let parsed = zones.len();

        let nearby = area.radius.retain_within(zones, TsunamiZone::anchor);
        tracing::debug!(parsed, nearby = nearby.len(), "Filtered tsunami zones to radius");

        Ok(TsunamiResponse {
            location: Location::in_area(point, &area.name),
            summary: summarize(&nearby),
            metadata: TsunamiMetadata {
                source: "Hawaii State GIS Program".to_string(),
                description: "Tsunami evacuation zones for Hawaii".to_string(),
                last_updated: "2024".to_string(),
                total_zones: nearby.len(),
            },
            zones: nearby,
        })
    }
}

fn summarize(zones: &[TsunamiZone]) -> ZoneSummary {
    zones.iter().fold(ZoneSummary::default(), |mut summary, zone| {
        match zone.tier() {
            ZoneTier::Evacuation => summary.evacuation += 1,
            ZoneTier::Extreme => summary.extreme += 1,
            ZoneTier::Safe => summary.safe += 1,
            ZoneTier::Unclassified => summary.unclassified += 1,
        }
        summary
    })
}
