//! Error types for gridclear
//!
//! Uses `thiserror` for library errors. Per-region failures never surface
//! here; they are reported as `ClearOutcome::Failed` instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gridclear operations
pub type GridClearResult<T> = Result<T, GridClearError>;

/// Main error type for gridclear operations
#[derive(Error, Debug)]
pub enum GridClearError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot file could not be parsed or written
    #[error("invalid snapshot {path}: {message}")]
    Snapshot { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Batch size must be at least one
    #[error("batch size must be at least 1 (got {0})")]
    InvalidBatchSize(usize),

    /// Snapshot lock could not be acquired
    #[error("failed to lock {path}: {message}")]
    Lock { path: PathBuf, message: String },
}
