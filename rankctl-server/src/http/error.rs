//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rankctl_core::RankError;
use serde_json::json;

use crate::churn::ChurnError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Rating outside the accepted range (400)
    OutOfRange { rating: i32, min: i32, max: i32 },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Internal error (500)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::OutOfRange { rating, min, max } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "out_of_range",
                    "message": format!("rating must be between {} and {}, got {}", min, max, rating)
                }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": message
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<RankError> for ApiError {
    fn from(e: RankError) -> Self {
        match e {
            RankError::NotFound { username } => Self::NotFound {
                resource: "user",
                id: username,
            },
            // No route inserts, so a duplicate here is a server bug
            e @ RankError::DuplicateKey { .. } => Self::Internal {
                message: e.to_string(),
            },
            RankError::OutOfRange { rating, min, max } => Self::OutOfRange { rating, min, max },
        }
    }
}

impl From<ChurnError> for ApiError {
    fn from(e: ChurnError) -> Self {
        Self::Internal {
            message: e.to_string(),
        }
    }
}
