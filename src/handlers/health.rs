use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder};

/// # Service Health Check Endpoint
///
/// Liveness probe for the garden service.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] with `status` `"ok"`, `service`
///     `"garden-service"` and the RFC 3339 time of the check
///
/// ## Example Success Response
/// ```json
/// {
///   "status": "ok",
///   "service": "garden-service",
///   "timestamp": "2023-10-05T14:23:45.678Z"
/// }
/// ```
///
/// [`HealthResponse`]: crate::models::health::HealthResponse
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        // Arrange
        let app = test::init_service(
            App::new().service(web::resource("/health").route(web::get().to(health_check))),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();

        // Act
        let issued = Utc::now();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(
            content_type, "application/json",
            "Content-Type should be application/json"
        );

        let body = test::read_body(resp).await;
        let received = Utc::now();
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");

        assert_eq!(body_json["status"], "ok");
        assert_eq!(body_json["service"], "garden-service");

        let timestamp = body_json["timestamp"]
            .as_str()
            .expect("Timestamp should be a string");
        let checked_at = DateTime::parse_from_rfc3339(timestamp)
            .expect("Timestamp should be a valid RFC 3339 date")
            .with_timezone(&Utc);
        assert!(checked_at >= issued, "Timestamp predates the request");
        assert!(checked_at <= received, "Timestamp postdates the response");
    }
}
