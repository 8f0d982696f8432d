//! Aina Core - Domain models, configuration, file readers and caching
//!
//! This crate contains the data model and source-file readers shared by the
//! Aina public information service.

pub mod cache;
pub mod config;
pub mod error;
pub mod formats;
pub mod models;
pub mod soil;

pub use error::{AinaError, Result};
