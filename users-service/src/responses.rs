//! Uniform JSON response envelope
//!
//! Every handler answers with `{status, message, data}`:
//!
//! ```json
//! {"status": "success", "message": "User found", "data": {"id": 1, ...}}
//! {"status": "error", "message": "User not found"}
//! ```
//!
//! `data` is left out entirely when there is nothing to return.
//!
//! ## Example Usage
//!
//! ```rust
//! use users_service::responses::{Created, Envelope};
//!
//! async fn ping() -> Envelope<&'static str> {
//!     Envelope::success("pong", "ok")
//! }
//!
//! async fn make() -> Created<u64> {
//!     Created::new("Thing created", 42)
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome marker carried in every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Response envelope
///
/// Renders as `200 OK` with a JSON body. Use [`Created`] for `201`, or
/// [`Envelope::with_status`] for anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    pub status: Status,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Pair the envelope with a status code other than `200 OK`
    pub fn with_status(self, status: StatusCode) -> (StatusCode, Self) {
        (status, self)
    }
}

impl Envelope {
    /// Successful envelope without data
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: None,
        }
    }

    /// Error envelope; errors never carry data
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// HTTP 201 Created response wrapping a success envelope
#[derive(Debug)]
pub struct Created<T>(Envelope<T>);

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self(Envelope::success(message, data))
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
