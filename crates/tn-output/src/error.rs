//! Error types for tn-output.

use thiserror::Error;

/// Errors that can occur while rendering or writing an artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Color values in `[4, 5)`, NaN and infinities fall in no color bucket.
    #[error("feature {index}: color value {value} has no color bucket")]
    UnassignedColor { index: usize, value: f64 },

    #[error("feature {index}: weight {value} is not finite")]
    InvalidWeight { index: usize, value: f64 },

    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch { what: &'static str, expected: usize, got: usize },

    #[error("nothing to write: {0} is empty")]
    Empty(&'static str),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
