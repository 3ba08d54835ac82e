//! Error types
//!
//! Shared error enum for all calculators.

use thiserror::Error;

/// Health calculation error types
#[derive(Debug, Error)]
pub enum HealthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No analysis has been performed yet")]
    NullState,
}

impl HealthError {
    /// Shorthand for building an `InvalidArgument` error
    pub fn invalid(message: impl Into<String>) -> Self {
        HealthError::InvalidArgument(message.into())
    }
}

/// Result type for health calculations
pub type HealthResult<T> = Result<T, HealthError>;
