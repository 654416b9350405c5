use axum::Json;
use chrono::Utc;

use crate::modules::status::schema::{HealthResponse, RootResponse};

pub const SERVICE_NAME: &str = "photography-studio-api";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Photography Studio API".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
    })
}
