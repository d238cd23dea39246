use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, WelcomeResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sistema-Cloud API",
        description = "API for the Sistema-Cloud machine safety analysis platform"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "root", description = "Service identification"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;
