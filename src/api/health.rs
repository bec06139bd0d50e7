use axum::Json;
use chrono::Utc;

/// Health check endpoint for deployment liveness checks.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
