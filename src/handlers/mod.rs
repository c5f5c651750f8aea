/// # Service Health Check Endpoint
///
/// Liveness probe reporting `status`, `service` and the time of the check.
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "ok",
///   "service": "garden-service",
///   "timestamp": "2023-10-05T14:23:45.678Z"
/// }
/// ```
pub mod health;

/// Greeting served at the API root
pub mod hello;
