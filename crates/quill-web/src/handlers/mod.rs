//! HTTP handlers for quill-web.

pub mod analytics;
pub mod notes;

use axum::Json;

/// Liveness probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
