use crate::models::{iso_timestamp, HealthResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// Always healthy while the process can answer. Reports uptime in seconds
/// and the environment name the process was started with.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let uptime = state.uptime_secs();
    tracing::debug!(uptime, "Health check requested");

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            uptime,
            timestamp: iso_timestamp(Utc::now()),
            environment: state.config.environment.clone(),
        }),
    )
}
