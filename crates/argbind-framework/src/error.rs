//! Error types for the argbind framework.

use argbind_core::ConfigurationError;
use thiserror::Error;

use crate::matcher::MatchReport;

/// Errors returned by an analysis call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// The raw arguments could not be read.
    #[error("invalid call: {reason}")]
    InvalidCall {
        /// What was wrong with the input.
        reason: String,
    },

    /// The target type's schema is broken. Never retried.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Binding failed and the failure policy is `fail`.
    #[error("arguments rejected: {0}")]
    Rejected(MatchReport),
}

impl AnalyzeError {
    /// Creates an invalid-call error.
    pub fn invalid_call(reason: impl Into<String>) -> Self {
        Self::InvalidCall {
            reason: reason.into(),
        }
    }

    /// Returns `true` for programmer errors in the target type's schema.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
