//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `TnError` as one variant
//! (`ReadError::Core`) where core conversions can fail.

use thiserror::Error;

/// The top-level error type for `tn-core`.
#[derive(Debug, Error)]
pub enum TnError {
    #[error("invalid identifier {0:?}: expected a non-negative integer")]
    InvalidId(String),

    /// Text that is not a number at all.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `tn-*` crates.
pub type TnResult<T> = Result<T, TnError>;
