use aina_core::models::LocationMetrics;
use aina_store::group_metric_rows;

use crate::state::AppState;

/// Cache slot shared by every metrics request
pub const METRICS_CACHE_KEY: &str = "all_sensors_per_patch";

/// Sensor series per site for the requesting user's aina
pub struct MetricsService;

impl MetricsService {
    /// Best effort: lookup or storage failures yield an empty list.
    ///
    /// A fresh cache entry is returned whoever asks. Empty results from an
    /// unknown user or aina are not cached.
    pub async fn locations(state: &AppState, subject: Option<&str>) -> Vec<LocationMetrics> {
        let key = METRICS_CACHE_KEY.to_string();

        if let Some(cached) = state.metrics_cache.get(&key) {
            tracing::debug!(key = %key, "Serving sensor metrics from cache");
            return cached;
        }

        tracing::debug!(key = %key, "Sensor metrics not cached, querying store");

        match Self::compute(state, subject).await {
            Ok(Some(locations)) => {
                state.metrics_cache.insert(key, locations.clone());
                locations
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load sensor metrics");
                Vec::new()
            }
        }
    }

    async fn compute(
        state: &AppState,
        subject: Option<&str>,
    ) -> aina_core::Result<Option<Vec<LocationMetrics>>> {
        let Some(subject) = subject else {
            tracing::debug!("No user subject on metrics request");
            return Ok(None);
        };

        let Some(user_id) = state.metric_store.find_user_id(subject).await? else {
            tracing::debug!(subject = %subject, "Unknown user");
            return Ok(None);
        };

        let Some(aina_id) = state.metric_store.find_aina_id(user_id).await? else {
            tracing::debug!(user_id = user_id.0, "User has no aina");
            return Ok(None);
        };

        let rows = state.metric_store.metric_rows(aina_id).await?;
        let row_count = rows.len();
        let locations = group_metric_rows(rows);

        tracing::info!(
            aina_id = aina_id.0,
            rows = row_count,
            locations = locations.len(),
            "Computed sensor metrics"
        );

        Ok(Some(locations))
    }
}
