use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{CoordinateQuery, TsunamiResponse};
use crate::error::ApiError;
use crate::services::TsunamiService;
use crate::state::AppState;

pub async fn get_tsunami_zones(
    State(state): State<Arc<AppState>>,
    query: CoordinateQuery,
) -> Result<Json<TsunamiResponse>, ApiError> {
    let point = query.coordinates()?;
    tracing::info!(lat = point.lat, lon = point.lon, "Fetching tsunami evacuation zones");

    let response = TsunamiService::lookup(&state, point).await?;
    tracing::info!(
        zones = response.metadata.total_zones,
        evacuation = response.summary.evacuation,
        extreme = response.summary.extreme,
        safe = response.summary.safe,
        "Returning tsunami zones"
    );
    Ok(Json(response))
}
