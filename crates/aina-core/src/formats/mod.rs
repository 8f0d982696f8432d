//! Readers for the static source files served by the dashboard

pub mod geojson;
pub mod tabular;

pub use self::geojson::{
    parse_feature_collection, read_feature_collection, Properties, SourceFeature,
};
pub use tabular::{ColumnSpec, TabularReader, TabularSchema};
