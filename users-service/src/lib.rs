//! # users-service
//!
//! A small JSON-over-HTTP service exposing CRUD operations over an in-memory
//! collection of users. Every response is wrapped in the same envelope:
//!
//! ```json
//! {"status": "success", "message": "User found", "data": {"id": 1, "name": "John Doe", ...}}
//! ```
//!
//! ## Endpoints
//!
//! - `GET /api/v1/health`: liveness, version and current time
//! - `GET /api/v1/users`: every user, in insertion order
//! - `GET /api/v1/users/{id}`: one user
//! - `POST /api/v1/users`: create from `{"name": ..., "email": ...}`
//! - `DELETE /api/v1/users/{id}`: remove one user
//!
//! ## Example
//!
//! ```rust,no_run
//! use users_service::{init_tracing, router, AppState, Config, Result, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let app = router(AppState::seeded(config.clone()));
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use observability::init_tracing;
pub use routes::router;
pub use server::Server;
pub use state::AppState;
pub use store::UserStore;
