use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{CoordinateQuery, SoilResponse};
use crate::error::ApiError;
use crate::services::SoilService;
use crate::state::AppState;

pub async fn get_soil_data(
    State(state): State<Arc<AppState>>,
    query: CoordinateQuery,
) -> Result<Json<SoilResponse>, ApiError> {
    let point = query.coordinates()?;
    tracing::info!(lat = point.lat, lon = point.lon, "Fetching soil health data");

    let response = SoilService::lookup(&state, point).await?;
    Ok(Json(response))
}
