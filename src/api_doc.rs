use utoipa::OpenApi;

use crate::error::{ErrorResponse, InternalErrorResponse};
use crate::handlers;
use crate::models::{HealthResponse, RootResponse, StatusResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "devops-assignment-api",
        version = "1.0.0",
        description = "Informational endpoints: welcome message, health check and service status"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::status::status_handler
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            StatusResponse,
            ErrorResponse,
            InternalErrorResponse
        )
    ),
    tags(
        (name = "info", description = "Service information"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
