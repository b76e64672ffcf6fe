//! # Error Types
//!
//! Errors raised by the foundational types. Crate-specific errors
//! (traversal, integrity, export) live in their own crates.

use thiserror::Error;

/// Error raised when parsing a foundational value from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiactError {
    /// A value did not match its expected textual format.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Scores must be integers.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
