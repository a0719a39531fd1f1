//! Health check handler

use serde::{Deserialize, Serialize};

use crate::models::{format_rfc3339, now};
use crate::responses::Envelope;

/// API version reported by the health check
pub const API_VERSION: &str = "1.0.0";

/// Service identifier reported by the health check
pub const SERVICE_ID: &str = "go-backend-api";

/// Health check payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthInfo {
    /// Current UTC time, RFC3339
    pub timestamp: String,
    pub version: String,
    pub service: String,
}

/// Liveness check
///
/// Always succeeds while the process is serving, independent of store state.
pub async fn health() -> Envelope<HealthInfo> {
    Envelope::success(
        "API is healthy",
        HealthInfo {
            timestamp: format_rfc3339(&now()),
            version: API_VERSION.to_string(),
            service: SERVICE_ID.to_string(),
        },
    )
}
