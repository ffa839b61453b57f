//! Export error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors raised while writing datasets to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode dataset as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("empty dataset for {0:?}")]
    EmptyDataset(String),
}
