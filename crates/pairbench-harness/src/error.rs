//! Harness error type.

use std::path::PathBuf;

/// Errors that stop a benchmark run.
///
/// Correctness mismatches are not errors; they are logged and collected in
/// the [`RunReport`](crate::runner::RunReport).
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Sweep bounds, step or repetition count are invalid.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// Generator range is empty or not representable.
    #[error("invalid generator range: {0}")]
    InvalidRange(String),

    /// Output directory or file could not be created or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A summary CSV file does not have the expected layout.
    #[error("malformed summary file {}, line {line}: {reason}", .path.display())]
    InvalidCsv {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Run manifest could not be encoded or decoded.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error comes from invalid configuration rather than I/O.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::InvalidSweep(_) | Self::InvalidRange(_))
    }
}
