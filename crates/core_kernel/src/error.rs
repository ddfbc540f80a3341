//! Core error types used across the system

use thiserror::Error;

/// Errors raised while parsing kernel-level values from untrusted input
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value outside a closed set of accepted names
    #[error("Unsupported {kind}: {value}")]
    Unsupported {
        kind: &'static str,
        value: String,
    },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn unsupported(kind: &'static str, value: impl Into<String>) -> Self {
        CoreError::Unsupported {
            kind,
            value: value.into(),
        }
    }
}
