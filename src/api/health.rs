//! Greeting and health check endpoints

use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /
///
/// Fixed greeting payload.
pub async fn read_root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "journal-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
