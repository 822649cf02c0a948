use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for any method and path without a registered route
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("No route for {} {}", method, uri);
    ApiError::RouteNotFound
}
