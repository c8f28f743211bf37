//! Error types for the Trialrun domain.
//!
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// The top-level error type for all Trialrun operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied value or the environment broke a required invariant.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl Error {
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation(message.into())
    }

    /// Whether this is a precondition violation.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation(_))
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;
