use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, database, code) = match state.comment_repo.ping().await {
        Ok(()) => ("healthy", "up", StatusCode::OK),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ("unhealthy", "down", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    let response = HealthResponse {
        status,
        database,
        version: env!("CARGO_PKG_VERSION"),
    };

    (code, Json(response))
}
