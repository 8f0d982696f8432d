//! Error types for Aina

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AinaError {
    // Source data errors
    #[error("Data file not found at {path}")]
    DataFileNotFound { path: PathBuf },

    #[error("Invalid GeoJSON in {source_name}: {reason}")]
    GeoJson { source_name: String, reason: String },

    #[error(
        "Schema drift in {source_name}: column {index} expected '{expected}', found '{found}'"
    )]
    SchemaDrift {
        source_name: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Empty tabular file {source_name}: header line is missing")]
    MissingHeader { source_name: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AinaError {
    /// True when the error means the requested record or file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, AinaError::DataFileNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, AinaError>;
