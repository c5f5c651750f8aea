/// # Health Status Response
///
/// Payload of the liveness endpoint: a fixed status and service name plus
/// the RFC 3339 time at which the check ran.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "service": "garden-service",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Fixed greeting payload served at the API root.
pub mod hello;

pub use health::HealthResponse;
pub use hello::HelloResponse;
