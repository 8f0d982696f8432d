use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{CoordinateQuery, ShorelineResponse};
use crate::error::ApiError;
use crate::services::ShorelineService;
use crate::state::AppState;

pub async fn get_shoreline_data(
    State(state): State<Arc<AppState>>,
    query: CoordinateQuery,
) -> Result<Json<ShorelineResponse>, ApiError> {
    let point = query.coordinates()?;
    tracing::info!(lat = point.lat, lon = point.lon, "Fetching shoreline access points");

    Ok(Json(ShorelineService::lookup(&state, point)?))
}
