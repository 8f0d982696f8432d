use std::sync::Arc;
use std::time::Duration;

use aina_core::cache::{Clock, TtlCache};
use aina_core::config::LayeredConfig;
use aina_core::models::LocationMetrics;
use aina_store::MetricStore;

pub type MetricsCache = TtlCache<String, Vec<LocationMetrics>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<LayeredConfig>,
    pub metric_store: Arc<dyn MetricStore>,
    pub metrics_cache: Arc<MetricsCache>,
}

impl AppState {
    pub fn new(config: LayeredConfig, metric_store: Arc<dyn MetricStore>) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_secs.value);
        Self {
            config: Arc::new(config),
            metric_store,
            metrics_cache: Arc::new(TtlCache::new(ttl)),
        }
    }

    /// Same as `new` but reading cache age from the given clock
    pub fn with_clock(
        config: LayeredConfig,
        metric_store: Arc<dyn MetricStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = Duration::from_secs(config.cache_ttl_secs.value);
        Self {
            config: Arc::new(config),
            metric_store,
            metrics_cache: Arc::new(TtlCache::with_clock(ttl, clock)),
        }
    }
}
