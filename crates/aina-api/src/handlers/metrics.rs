use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};

use crate::dto::MetricsResponse;
use crate::services::MetricsService;
use crate::state::AppState;

/// Header carrying the signed-in user's email, set by the session layer in front
pub const USER_SUBJECT_HEADER: &str = "x-user-email";

/// Always answers 200; failures surface as an empty list
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<MetricsResponse> {
    let subject = headers
        .get(USER_SUBJECT_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let locations = MetricsService::locations(&state, subject).await;
    Json(MetricsResponse { locations })
}
