use crate::handlers::health::health_check;
use actix_web::web;

/// # Route Configuration
///
/// Registers the health resource. Only `GET` is routed; any other method
/// on `/health` gets the resource default, `405 Method Not Allowed`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health_check)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HealthResponse;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "ok");
        assert_eq!(health_response.service, "garden-service");
        assert!(!health_response.timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_health_rejects_post() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
