use axum::Json;
use daybook_schema::HealthStatus;

/// GET /
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus::ok(env!("CARGO_PKG_NAME")))
}
