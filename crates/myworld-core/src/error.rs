//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was called with an argument that violates its contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing to an output sink failed.
    #[error("output error: {0}")]
    Output(String),
}
