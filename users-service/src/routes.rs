//! Route table
//!
//! | Method | Path                 | Handler       |
//! |--------|----------------------|---------------|
//! | GET    | `/api/v1/health`     | [`health`]      |
//! | GET    | `/api/v1/users`      | [`list_users`]  |
//! | GET    | `/api/v1/users/{id}` | [`get_user`]    |
//! | POST   | `/api/v1/users`      | [`create_user`] |
//! | DELETE | `/api/v1/users/{id}` | [`delete_user`] |
//!
//! Unknown paths get axum's bare `404`, known paths with another method get
//! `405`. Neither carries an envelope. A non-numeric `{id}` is a `404` for
//! every method.

use axum::{http::StatusCode, routing::get, Router};

use crate::handlers::{create_user, delete_user, get_user, health, list_users, UserIdPath};
use crate::state::AppState;

/// Base path every route is mounted under
pub const API_BASE_PATH: &str = "/api/v1";

/// Routes relative to [`API_BASE_PATH`], still awaiting state
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .delete(delete_user)
                .fallback(user_method_not_allowed),
        )
}

/// Unsupported methods on `/users/{id}`
///
/// The id is checked first so a malformed one stays unrouted.
async fn user_method_not_allowed(_: UserIdPath) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// The complete application router with state applied
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, api_routes())
        .with_state(state)
}
