use crate::models::{iso_timestamp, RootResponse, SERVICE_VERSION, WELCOME_MESSAGE};
use crate::routes;
use axum::{http::StatusCode, Json};
use chrono::Utc;

/// GET / handler - Welcome message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Welcome message", body = RootResponse)
    ),
    tag = "info"
)]
pub async fn root_handler() -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: WELCOME_MESSAGE.to_string(),
            version: SERVICE_VERSION.to_string(),
            timestamp: iso_timestamp(Utc::now()),
        }),
    )
}
