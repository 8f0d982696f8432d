mod geographic_names;
mod health;
mod metrics;
mod shoreline;
mod soil;
mod tsunami;

pub use geographic_names::get_geographic_names;
pub use health::health_check;
pub use metrics::{get_metrics, USER_SUBJECT_HEADER};
pub use shoreline::get_shoreline_data;
pub use soil::get_soil_data;
pub use tsunami::get_tsunami_zones;
