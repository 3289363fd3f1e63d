use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness probe: reports healthy as long as the process is serving.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
