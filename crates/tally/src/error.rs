//! Error types for the tally library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Error reading, writing or moving a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No delimiter could be inferred from the sampled lines.
    #[error("Could not detect delimiter: {0}")]
    DelimiterNotDetected(String),

    /// Delimiter specified by the caller is not usable.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// No values to compute statistics over.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Source path for the organizer is missing or not a directory.
    #[error("Invalid source directory: {path}")]
    InvalidDirectory { path: PathBuf },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TallyError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TallyError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
