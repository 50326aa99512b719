//! Error types for the petraflow engine.
//!
//! All crates return `PetraflowResult<T>` from fallible operations.
//! Per-point evaluation itself is infallible: every error here is a
//! setup-time configuration failure.

use thiserror::Error;

/// Unified error type for the petraflow engine.
#[derive(Debug, Error)]
pub enum PetraflowError {
    /// Configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required parameter was not supplied for the selected mode.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// An index into a tensor or parameter triple is out of range.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),
}

/// Convenience alias for `Result<T, PetraflowError>`.
pub type PetraflowResult<T> = Result<T, PetraflowError>;
