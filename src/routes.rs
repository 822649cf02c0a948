use crate::error::handle_panic;
use crate::handlers::{health_handler, not_found_handler, root_handler, status_handler};
use crate::middleware::{lowercase_path, parse_json_body};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, normalize_path::NormalizePathLayer, trace::TraceLayer,
};

// Every API path, used by the router and the OpenAPI doc
pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const STATUS: &str = "/status";

/// Builds the full application router.
///
/// Paths match case-insensitively and ignore a trailing slash. Unknown
/// paths and known paths hit with the wrong method both get the 404
/// fallback. JSON bodies are parsed for every request, matched or not.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(ROOT, get(root_handler))
        .route(HEALTH, get(health_handler))
        .route(STATUS, get(status_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state);

    // Path rewrites have to happen before routing, so they wrap the inner
    // router as a service instead of going through `Router::layer`.
    let normalized = ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(lowercase_path)
        .service(routes);

    with_error_boundary(Router::new().fallback_service(normalized))
}

/// Wraps a router so JSON bodies are parsed and handler failures become
/// 500 JSON responses.
pub fn with_error_boundary(router: Router) -> Router {
    router
        .layer(middleware::from_fn(parse_json_body))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ApiError;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new(Config {
            service_port: 3000,
            environment: "development".to_string(),
        })
    }

    async fn send(app: Router, method: &str, uri: &str, body: Body) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn registered_routes_return_ok() {
        let app = create_router(test_state());

        for path in [ROOT, HEALTH, STATUS] {
            let response = send(app.clone(), "GET", path, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
            assert_eq!(response.headers()["content-type"], "application/json");
        }
    }

    #[tokio::test]
    async fn unknown_paths_return_404() {
        let app = create_router(test_state());

        for (method, path) in [
            ("GET", "/nonexistent"),
            ("GET", "/health/extra"),
            ("GET", "/healthz"),
            ("PUT", "/api/v1/things"),
            ("DELETE", "/status/"),
        ] {
            let response = send(app.clone(), method, path, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {path}");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": "Route not found" })
            );
        }
    }

    #[tokio::test]
    async fn wrong_method_on_known_path_returns_404() {
        let app = create_router(test_state());

        for (method, path) in [("POST", "/"), ("DELETE", "/health"), ("PUT", "/status")] {
            let response = send(app.clone(), method, path, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {path}");
            assert_eq!(
                body_json(response).await,
                serde_json::json!({ "error": "Route not found" })
            );
        }
    }

    #[tokio::test]
    async fn paths_match_case_insensitively_and_ignore_trailing_slash() {
        let app = create_router(test_state());

        for (path, status_field) in [
            ("/health/", "healthy"),
            ("/HEALTH", "healthy"),
            ("/Health/?verbose=1", "healthy"),
            ("/Status", "ok"),
            ("/status/", "ok"),
        ] {
            let response = send(app.clone(), "GET", path, Body::empty()).await;
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
            assert_eq!(body_json(response).await["status"], status_field, "GET {path}");
        }
    }

    #[tokio::test]
    async fn malformed_json_body_returns_500_on_any_route() {
        let app = create_router(test_state());

        for (method, path) in [("POST", "/"), ("GET", "/health"), ("GET", "/nonexistent")] {
            let response = send(app.clone(), method, path, Body::from("{bad")).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {path}"
            );
            let json = body_json(response).await;
            assert_eq!(json["error"], "Something went wrong!");
            assert!(json["message"].as_str().unwrap().contains("invalid JSON"));
        }
    }

    #[tokio::test]
    async fn post_with_json_body_returns_404() {
        let app = create_router(test_state());

        let response = send(app, "POST", "/", Body::from(r#"{"test":"data"}"#)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn panicking_handler_returns_500_and_router_survives() {
        async fn explode() -> &'static str {
            panic!("handler exploded")
        }

        let app = with_error_boundary(
            Router::new()
                .route("/explode", get(explode))
                .route(STATUS, get(status_handler)),
        );

        let response = send(app.clone(), "GET", "/explode", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "error": "Something went wrong!",
                "message": "handler exploded"
            })
        );

        let response = send(app, "GET", STATUS, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn failing_handler_returns_500_with_message() {
        async fn fail() -> Result<&'static str, ApiError> {
            Err(anyhow::anyhow!("upstream unavailable").into())
        }

        let app = with_error_boundary(Router::new().route("/fail", get(fail)));

        let response = send(app, "GET", "/fail", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Something went wrong!");
        assert_eq!(json["message"], "upstream unavailable");
    }
}
