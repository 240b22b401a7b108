//! Report export error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem error while preparing or writing the artifact.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be encoded.
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    /// The finished temp file could not be moved into place.
    #[error("failed to persist report to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
