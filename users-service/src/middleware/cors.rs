//! Cross-origin resource sharing
//!
//! The permissive policy allows any origin, the methods
//! `GET, POST, PUT, DELETE, OPTIONS` and the request headers
//! `Content-Type, Authorization`. Preflight requests are answered by the
//! layer itself and never reach the router.

use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Methods advertised to cross-origin callers
pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Request headers cross-origin callers may send
pub const ALLOWED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

/// The permissive CORS policy
pub fn permissive() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(ALLOWED_HEADERS)
}

/// Build the CORS layer for a configured mode
///
/// Returns `None` when CORS is disabled. Unknown modes fall back to the
/// permissive policy.
pub fn cors_layer(mode: &str) -> Option<CorsLayer> {
    match mode {
        "permissive" => {
            tracing::debug!("Enabling permissive CORS");
            Some(permissive())
        }
        "disabled" => {
            tracing::debug!("CORS disabled");
            None
        }
        other => {
            tracing::warn!("Unknown CORS mode: {}, defaulting to permissive", other);
            Some(permissive())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes() {
        assert!(cors_layer("permissive").is_some());
        assert!(cors_layer("disabled").is_none());
        assert!(cors_layer("bogus").is_some());
    }
}
