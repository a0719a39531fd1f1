//! Request handlers
//!
//! Handlers read or mutate the [`UserStore`](crate::store::UserStore) held in
//! [`AppState`](crate::state::AppState) and answer with an
//! [`Envelope`](crate::responses::Envelope). Failures are [`ApiError`]s,
//! which render as error envelopes with the matching status code.

mod error;
mod health;
mod path;
mod users;

pub use error::ApiError;
pub use health::{health, HealthInfo, API_VERSION, SERVICE_ID};
pub use path::UserIdPath;
pub use users::{create_user, delete_user, get_user, list_users};
