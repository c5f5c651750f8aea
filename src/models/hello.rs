use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING: &str = "Happy Day Garden Service is running!";

/// Greeting returned by `GET /api/v1/`.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

impl HelloResponse {
    pub fn greeting() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}
