use crate::config::ServerConfig;
use crate::error::{Result, ServiceError};
use crate::middleware::{Cors, RequestTrace};
use crate::openapi::ApiDoc;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application served by every worker.
///
/// Middleware order, outermost first: request tracing, then CORS, so the
/// request span also covers pre-flight answers.
///
/// # Endpoints
/// - API: `/api/v1/` and `/api/v1/health` (see [`crate::routes::configure`])
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
pub fn build_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .wrap(Cors)
        .wrap(RequestTrace)
        .configure(crate::routes::configure)
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
}

/// Binds the listener and serves [`build_app`] until shutdown.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let mut server = HttpServer::new(build_app);
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let addr = config.bind_address();
    let server = server
        .bind((config.host.as_str(), config.port))
        .map_err(|source| ServiceError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %addr,
        "Garden Service is running on port {}",
        config.port
    );

    server.run().await?;
    Ok(())
}
