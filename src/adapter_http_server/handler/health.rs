use axum::http::StatusCode;

/// Liveness probe, the service holds no dependency worth checking.
pub async fn handler() -> StatusCode {
    StatusCode::OK
}
