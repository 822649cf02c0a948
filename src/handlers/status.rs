use crate::models::{StatusResponse, SERVICE_NAME, SERVICE_VERSION};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /status handler - Static service identity
#[utoipa::path(
    get,
    path = routes::STATUS,
    responses(
        (status = 200, description = "Service status", body = StatusResponse)
    ),
    tag = "info"
)]
pub async fn status_handler() -> (StatusCode, Json<StatusResponse>) {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }),
    )
}
