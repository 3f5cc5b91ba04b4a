//! WebAPI - REST API Endpoints
//!
//! ## Responsibilities
//!
//! - HTTP API routes
//! - Request normalization and validation
//! - Response formatting

mod routes;
mod stream;

pub use routes::create_router;

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "ok": true,
        "ts": chrono::Utc::now().timestamp_millis(),
    }))
}
