mod geographic_names;
mod metrics;
mod shoreline;
mod soil;
mod tsunami;

pub use geographic_names::GeographicNamesService;
pub use metrics::{MetricsService, METRICS_CACHE_KEY};
pub use shoreline::ShorelineService;
pub use soil::SoilService;
pub use tsunami::TsunamiService;
