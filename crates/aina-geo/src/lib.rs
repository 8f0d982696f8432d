//! Aina Geo - Area filters, distances and feature categorization
//!
//! Point containment against the fixed area of interest, great-circle
//! distances for path lengths, and partitioning of features into buckets.

pub mod area;
pub mod categorize;
pub mod distance;

pub use area::Containment;
pub use categorize::{categorize, CategorizedFeatures, CategoryCounts, FeatureCategory};
pub use distance::{haversine_km, path_length_km, Bounds};
