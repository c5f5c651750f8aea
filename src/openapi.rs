use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Describes the `/api/v1` surface with utoipa procedural macros. Served as
/// JSON at `/api-docs/openapi.json` and browsable through Swagger UI.
///
/// # Endpoints
/// - Greeting: `GET /api/v1/`
/// - Health Check: `GET /api/v1/health`
///
/// # Schemas
/// - `HelloResponse`: greeting payload
/// - `HealthResponse`: service status payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::hello::hello,
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            crate::models::hello::HelloResponse,
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Service greeting"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Happy Day garden service",
        title = "Garden Service API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
