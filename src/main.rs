use garden_service::config::{DEFAULT_LOG_FILTER, ServerConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Garden Service Entry Point
///
/// Loads `.env` (if present), initialises tracing, reads the server
/// configuration from the environment and runs the Actix-web server.
///
/// # Endpoints
/// - `GET /api/v1/` greeting
/// - `GET /api/v1/health` liveness probe
///
/// # Configuration
/// - `GARDEN_HOST` / `GARDEN_PORT` default to `0.0.0.0:8082`
/// - `GARDEN_WORKERS` overrides the worker count
/// - `RUST_LOG` overrides the log filter
///
/// Any startup failure is logged and the process exits with status 1.
#[actix_web::main]
async fn main() {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = match ServerConfig::from_env() {
        Ok(config) => garden_service::server::run(&config).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "Garden Service failed");
        std::process::exit(1);
    }
}
