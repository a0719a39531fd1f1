//! Data models for the users API

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::handlers::ApiError;

/// User identifier, assigned by the store
pub type UserId = u64;

/// User record
///
/// Immutable once created; the only mutation the service supports is removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub created: DateTime<Utc>,
}

impl User {
    /// Build a user stamped with the current time
    pub fn new(id: UserId, fields: NewUser) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            created: now(),
        }
    }
}

/// Validated fields for a user about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Create user request body
///
/// Absent and `null` fields decode as `None` so that the payload shape and the
/// presence check fail with different messages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Check that both name and email are present and non-empty
    pub fn validate(self) -> Result<NewUser, ApiError> {
        match (self.name, self.email) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Ok(NewUser { name, email })
            }
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// Current UTC time at second precision
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// RFC3339 rendering used on the wire, e.g. `2024-05-01T12:30:00Z`
pub fn format_rfc3339(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn serialize_rfc3339<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_rfc3339(timestamp))
}
