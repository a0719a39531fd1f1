//! Path parameter extraction for `/users/{id}`
//!
//! Only ids made of ASCII digits are routed to a handler. Anything else is
//! rejected with the same bare `404 Not Found` the router gives an unknown
//! path, so the "User not found" envelope is reserved for well-formed ids
//! that are simply absent from the store.

use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};

/// A `{id}` path segment known to be one or more decimal digits
///
/// The raw text is kept as sent (`"007"` stays `"007"`) because lookups
/// compare against each user's decimal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdPath(pub String);

impl UserIdPath {
    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
    }
}

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        if !Self::is_valid(&raw) {
            tracing::debug!(id = %raw, "Rejecting non-numeric user id");
            return Err(StatusCode::NOT_FOUND);
        }

        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_ids_are_valid() {
        assert!(UserIdPath::is_valid("1"));
        assert!(UserIdPath::is_valid("0042"));
        assert!(UserIdPath::is_valid("18446744073709551616"));
    }

    #[test]
    fn test_non_digit_ids_are_invalid() {
        assert!(!UserIdPath::is_valid(""));
        assert!(!UserIdPath::is_valid("abc"));
        assert!(!UserIdPath::is_valid("-1"));
        assert!(!UserIdPath::is_valid("1.5"));
        assert!(!UserIdPath::is_valid("١"));
    }
}
