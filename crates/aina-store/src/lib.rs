//! Aina Store - Metric storage ports and adapters
//!
//! This crate defines the metric store port, provides in-memory and
//! PostgreSQL adapters, and folds raw readings into per-location series.

pub mod aggregate;
pub mod memory;
pub mod ports;
pub mod postgres;

pub use aggregate::group_metric_rows;
pub use memory::MemoryMetricStore;
pub use ports::MetricStore;
