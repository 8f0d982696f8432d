use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Public information
        .route("/api/geographic-names", get(handlers::get_geographic_names))
        .route("/api/soil-data", get(handlers::get_soil_data))
        .route("/api/shoreline-data", get(handlers::get_shoreline_data))
        .route("/api/tsunami-zones", get(handlers::get_tsunami_zones))

        // Sensors
        .route("/api/metrics", get(handlers::get_metrics))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
