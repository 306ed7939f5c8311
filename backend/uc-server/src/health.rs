use axum::Json;
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Unix seconds, same clock format as `UserDto`
    pub timestamp: i64,
}

/// GET /
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// GET /health
///
/// Answers as long as the server task is accepting requests. The store is not
/// queried.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
