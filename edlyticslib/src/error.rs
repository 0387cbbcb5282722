//! Error types for edlyticslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, filtering, or exporting dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Failed to read a dataset file
    #[error("failed to read dataset '{path}': {source}")]
    DataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON of the expected shape
    #[error("failed to parse dataset '{path}': {source}")]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A selector value that is not one of the dataset's buckets
    #[error("unknown {field} '{value}'")]
    UnknownCategory { field: &'static str, value: String },

    /// Table column name that cannot be sorted on
    #[error("unknown table column: {0}")]
    UnknownColumn(String),

    /// Dashboard tab name
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// Export format name
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// JSON serialization failed during export
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
