//! Health check handlers

use axum::Json;
use serde::Serialize;

/// Plain-text liveness probe, kept for the frontend's landing check.
pub async fn home() -> &'static str {
    "Vantage Backend Running"
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
}

pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
