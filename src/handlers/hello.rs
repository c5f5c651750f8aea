use crate::models::hello::HelloResponse;
use actix_web::{HttpResponse, Responder};

/// Greeting served at the API root.
#[utoipa::path(
    get,
    path = "/api/v1/",
    responses(
        (status = 200, description = "Service greeting", body = HelloResponse)
    ),
    tag = "Greeting"
)]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloResponse::greeting())
}
