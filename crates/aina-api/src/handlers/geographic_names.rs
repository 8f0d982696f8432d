use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{CoordinateQuery, GeographicNamesResponse};
use crate::error::ApiError;
use crate::services::GeographicNamesService;
use crate::state::AppState;

pub async fn get_geographic_names(
    State(state): State<Arc<AppState>>,
    query: CoordinateQuery,
) -> Result<Json<GeographicNamesResponse>, ApiError> {
    let point = query.coordinates()?;
    tracing::info!(lat = point.lat, lon = point.lon, "Fetching geographic names");

    let response = GeographicNamesService::lookup(&state, point).await?;
    tracing::info!(total = response.metadata.total_features, "Returning geographic names");
    Ok(Json(response))
}
