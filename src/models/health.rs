use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of `service` in every health response.
pub const SERVICE_NAME: &str = "garden-service";

/// # Health Status Response
///
/// Liveness payload returned by `GET /api/v1/health`.
///
/// ## Fields
/// - `status`: always `"ok"` while the process answers requests
/// - `service`: the service identifier, `"garden-service"`
/// - `timestamp`: RFC 3339 time at which the handler ran (UTC)
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "service": "garden-service",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}
