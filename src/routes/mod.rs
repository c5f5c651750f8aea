use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health` returns the service liveness payload.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "service": "garden-service",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # Greeting Endpoint
///
/// `GET /` returns `{"message": "Happy Day Garden Service is running!"}`.
pub mod hello;

/// Base path shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Greeting (see [`hello::configure_routes`])
/// - Health check (see [`health::configure_routes`])
///
/// ## Endpoints
///
/// ```text
/// GET /api/v1/       - Service greeting
/// GET /api/v1/health - Service health status
/// ```
///
/// Unknown paths fall through to the application default, `404 Not Found`.
///
/// [`hello::configure_routes`]: crate::routes::hello::configure_routes
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .configure(hello::configure_routes)
            .configure(health::configure_routes),
    );
}
