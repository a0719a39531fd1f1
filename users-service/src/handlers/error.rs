//! API error types for handler operations
//!
//! Each variant maps to a fixed HTTP status code and message and renders as
//! an error envelope via `IntoResponse`.
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use users_service::handlers::ApiError;
//!
//! let error = ApiError::UserNotFound;
//! assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
//! assert_eq!(error.to_string(), "User not found");
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::responses::Envelope;

/// Request-level failure reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The body is not JSON of the expected shape
    #[error("Invalid JSON payload")]
    InvalidPayload,

    /// `name` or `email` is empty or absent
    #[error("Name and email are required")]
    MissingFields,

    /// No user has the requested id
    #[error("User not found")]
    UserNotFound,
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Envelope::error(self.to_string())
            .with_status(self.status_code())
            .into_response()
    }
}
