//! Service-level error types
//!
//! These errors cover startup and infrastructure failures: loading
//! configuration, resolving the listen port, binding and serving. They never
//! reach an HTTP client. Request-level failures live in
//! [`crate::handlers::ApiError`] and render as response envelopes.

use thiserror::Error;

/// Service error
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// The `PORT` environment variable is not a valid TCP port
    #[error("Invalid port '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),

    /// I/O error (binding the listener, serving connections)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Result type alias using the service [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
