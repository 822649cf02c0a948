use crate::error::ApiError;
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};

/// Largest JSON body accepted before the request fails (100 KiB).
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Parses `application/json` request bodies before routing.
///
/// The parsed value is discarded; the raw bytes are handed on unchanged.
/// Only objects and arrays are accepted at the top level. An empty body is
/// fine. Anything else fails the request with `ApiError::Internal`.
pub async fn parse_json_body(request: Request, next: Next) -> Result<Response, ApiError> {
    if !is_json(request.headers()) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, JSON_BODY_LIMIT)
        .await
        .map_err(|_| anyhow!("request entity too large"))?;

    if !bytes.is_empty() {
        let value: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| anyhow!("invalid JSON in request body: {e}"))?;
        if !(value.is_object() || value.is_array()) {
            return Err(anyhow!("JSON request body must be an object or an array").into());
        }
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

/// Lowercases the request path so routes match case-insensitively.
///
/// The query string is left untouched.
pub fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let lowered = uri.path().to_ascii_lowercase();
    let path_and_query = match uri.query() {
        Some(query) => format!("{lowered}?{query}"),
        None => lowered,
    };

    let mut parts = uri.clone().into_parts();
    match path_and_query.parse() {
        Ok(pq) => parts.path_and_query = Some(pq),
        Err(_) => return request,
    }
    if let Ok(new_uri) = Uri::from_parts(parts) {
        *request.uri_mut() = new_uri;
    }

    request
}
