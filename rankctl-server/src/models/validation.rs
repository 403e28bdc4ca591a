//! Validation error types

use std::fmt;

/// Validation error for request models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Path segment could not be decoded
    InvalidPath { reason: String },

    /// Request body could not be decoded
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::InvalidPath { reason } => write!(f, "invalid path: {}", reason),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
