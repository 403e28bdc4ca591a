/// Structured error types for rankctl-core.
///
/// Every variant is a terminal, synchronous rejection. A failed mutation
/// leaves the index exactly as it was.

use thiserror::Error;

/// Main error type for rank index operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Username already present in the index
    #[error("user with username {username} already exists")]
    DuplicateKey { username: String },

    /// Rating outside the index's closed rating range
    #[error("rating must be between {min} and {max}, got {rating}")]
    OutOfRange { rating: i32, min: i32, max: i32 },

    /// Username not present in the index
    #[error("user not found: {username}")]
    NotFound { username: String },
}

/// Result type alias for rankctl-core operations
pub type Result<T> = std::result::Result<T, RankError>;

impl RankError {
    /// Create a duplicate key error
    pub fn duplicate_key(username: impl Into<String>) -> Self {
        Self::DuplicateKey {
            username: username.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(username: impl Into<String>) -> Self {
        Self::NotFound {
            username: username.into(),
        }
    }

    /// Whether the error refers to a missing participant
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
