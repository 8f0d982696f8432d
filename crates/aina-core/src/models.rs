pub mod area;
pub mod feature;
pub mod geometry;
pub mod metrics;
pub mod shoreline;
pub mod soil;
pub mod tsunami;

pub use area::{AreaOfInterest, BoundingBox, RadiusArea, WAIMANALO};
pub use feature::GeographicFeature;
pub use geometry::{Geometry, LatLon};
pub use metrics::{AinaId, LocationMetrics, MetricPoint, MetricRow, UserId};
pub use shoreline::{ShorelinePoint, ShorelineProperties, ShorelineType};
pub use soil::{SoilRecord, Suitability};
pub use tsunami::{TsunamiZone, ZoneTier};
