//! Shared primitives for all Rust crates in Waymark.

#![forbid(unsafe_code)]

/// Issue identifier primitives shared with identifier resolvers.
pub mod issue;

use thiserror::Error;

pub use issue::{EMPTY_ID, IssueId, UNKNOWN_ID};

/// Result type used across Waymark crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Activity payload does not match the shape required by its action kind.
    #[error("malformed payload for action '{action}': {source}")]
    MalformedPayload {
        /// Transport name of the action whose payload failed to decode.
        action: &'static str,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
