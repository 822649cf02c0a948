use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

pub const ROUTE_NOT_FOUND: &str = "Route not found";
pub const INTERNAL_ERROR: &str = "Something went wrong!";

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for unhandled handler failures
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InternalErrorResponse {
    pub error: String,
    pub message: String,
}

/// Custom error type for API endpoints
///
/// Every failure a request can hit ends up here, so unmatched routes and
/// handler failures share one JSON shape per status code.
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the method and path
    RouteNotFound,
    /// A handler failed and could not recover
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: ROUTE_NOT_FOUND.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalErrorResponse {
                        error: INTERNAL_ERROR.to_string(),
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

/// Converts a panic caught by `CatchPanicLayer` into a 500 response.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    ApiError::Internal(anyhow::anyhow!(message)).into_response()
}
