use axum::{Json, response::IntoResponse};

/// Liveness probe.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "API is running" }))
}
