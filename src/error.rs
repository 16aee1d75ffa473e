//! Error types for csv-replace.
//!
//! All operations return `Result<T>` which aliases `Result<T, ReplaceError>`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from CSV update operations.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Source file does not exist or cannot be opened for reading.
    #[error("Cannot open '{path}': {source}")]
    NotFound { path: PathBuf, source: io::Error },

    /// Header declares the same column name more than once.
    #[error("Duplicate column name '{0}' in header")]
    DuplicateColumn(String),

    /// A record could not be decoded or re-encoded against the header.
    #[error("Invalid CSV data: {0}")]
    Csv(#[source] csv::Error),

    /// Staging, writing, or publishing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<csv::Error> for ReplaceError {
    fn from(err: csv::Error) -> Self {
        // The csv crate wraps I/O failures it hits mid-read; unwrap those so
        // `Csv` is reserved for malformed data.
        if !err.is_io_error() {
            return Self::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(err) => Self::Io(err),
            _ => unreachable!(),
        }
    }
}

/// Result type alias for csv-replace operations.
pub type Result<T> = std::result::Result<T, ReplaceError>;
