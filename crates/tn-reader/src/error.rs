//! Reader error type.

use thiserror::Error;

use tn_core::TnError;

/// Errors produced by `tn-reader`.  Every variant aborts the whole read; no
/// partial table is returned.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The input does not match the dialect's structure.
    #[error("format error at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("no `~` sentinel line found; the file has no link section")]
    MissingSentinel,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Core(#[from] TnError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        ReadError::Format { line, reason: reason.into() }
    }
}

pub type ReadResult<T> = Result<T, ReadError>;
