//! HTTP handlers for the users collection

use axum::{body::Bytes, extract::State};

use super::{ApiError, UserIdPath};
use crate::models::{CreateUserRequest, User};
use crate::responses::{Created, Envelope};
use crate::state::AppState;

/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> Envelope<Vec<User>> {
    let users = state.store().list().await;
    tracing::debug!(count = users.len(), "Listing users");

    Envelope::success("Users retrieved successfully", users)
}

/// Get a user by id
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Envelope<User>, ApiError> {
    let user = state.store().get(&id).await.ok_or_else(|| {
        tracing::debug!(%id, "User not found");
        ApiError::UserNotFound
    })?;

    Ok(Envelope::success("User found", user))
}

/// Create a new user
///
/// The body is decoded regardless of the request's content type. A bare
/// `null` body counts as an empty request.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Created<User>, ApiError> {
    let request: Option<CreateUserRequest> = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejecting malformed create payload");
        ApiError::InvalidPayload
    })?;

    let fields = request.unwrap_or_default().validate().inspect_err(|_| {
        tracing::warn!("Rejecting create payload without name or email");
    })?;

    let user = state.store().create(fields).await;
    tracing::info!(id = user.id, "Created user");

    Ok(Created::new("User created successfully", user))
}

/// Delete a user by id
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Envelope, ApiError> {
    match state.store().delete(&id).await {
        Some(user) => {
            tracing::info!(id = user.id, "Deleted user");
            Ok(Envelope::ok("User deleted successfully"))
        }
        None => {
            tracing::debug!(%id, "User not found");
            Err(ApiError::UserNotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::responses::Status;
    use crate::store::UserStore;

    fn state() -> AppState {
        AppState::new(Config::default(), UserStore::seeded())
    }

    fn path(id: &str) -> UserIdPath {
        UserIdPath(id.to_string())
    }

    #[tokio::test]
    async fn test_list_users_returns_seed() {
        let envelope = list_users(State(state())).await;
        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.data.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_found_and_missing() {
        let state = state();

        let found = get_user(State(state.clone()), path("1")).await.unwrap();
        assert_eq!(found.message, "User found");
        assert_eq!(found.data.unwrap().name, "John Doe");

        let missing = get_user(State(state), path("99")).await.unwrap_err();
        assert_eq!(missing, ApiError::UserNotFound);
    }

    #[tokio::test]
    async fn test_create_user_rejects_bad_payloads_without_mutation() {
        let state = state();

        for (body, expected) in [
            ("", ApiError::InvalidPayload),
            ("not json", ApiError::InvalidPayload),
            ("null", ApiError::MissingFields),
            ("[]", ApiError::MissingFields),
            (r#"{"name":1,"email":"x@x.com"}"#, ApiError::InvalidPayload),
            (r#"{"name":"","email":"x@x.com"}"#, ApiError::MissingFields),
            (r#"{"name":"Ann","email":""}"#, ApiError::MissingFields),
        ] {
            let err = create_user(State(state.clone()), Bytes::from(body))
                .await
                .unwrap_err();
            assert_eq!(err, expected, "body: {body:?}");
        }

        assert_eq!(state.store().len().await, 2);
        assert_eq!(state.store().next_id().await, 3);
    }

    #[tokio::test]
    async fn test_create_then_delete() {
        let state = state();

        create_user(
            State(state.clone()),
            Bytes::from(r#"{"name":"Ann","email":"ann@x.com"}"#),
        )
        .await
        .unwrap();
        assert!(state.store().get("3").await.is_some());

        let deleted = delete_user(State(state.clone()), path("3")).await.unwrap();
        assert_eq!(deleted.message, "User deleted successfully");
        assert!(deleted.data.is_none());

        let again = delete_user(State(state), path("3")).await.unwrap_err();
        assert_eq!(again, ApiError::UserNotFound);
    }
}
