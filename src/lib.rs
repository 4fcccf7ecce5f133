//! # Sentiment Ingestion
//!
//! Fetches the tweet emotions dataset, keeps the `happiness` and `sadness` rows, encodes them as
//! binary labels, and writes seeded train/test partitions to disk.
#![forbid(unsafe_code)]

/// Stage parameters
pub mod config;

/// Datasets
pub mod datasets;

/// Error types
pub mod error;

/// Pipelines
pub mod pipelines;

/// Utilities
pub mod utils;

/// CLI indexes and utilities
pub mod cli;

pub use error::{IngestionError, Result};

/// The logger name every stage reports under
pub static LOG_TARGET: &str = "data_ingestion";
