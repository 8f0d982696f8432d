use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sensor reading joined with its metric type and site
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
    pub type_name: Option<String>,
    pub location_name: Option<String>,
}

/// A single point of a metric time series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// All metric series recorded at one location, keyed by metric type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationMetrics {
    pub name: String,
    pub data: BTreeMap<String, Vec<MetricPoint>>,
}

impl LocationMetrics {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: BTreeMap::new() }
    }

    /// Total number of points across every series
    pub fn point_count(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }
}

/// Identifier of a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Identifier of an aina (the land area a user stewards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AinaId(pub i64);
