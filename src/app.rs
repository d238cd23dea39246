use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::cors::{self, CorsPolicy};
use crate::handlers;
use crate::routes;
use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const APP_NAME: &str = "Sistema-Cloud";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Assemble the service router.
///
/// The cross-origin middleware wraps every route, the documentation routes
/// and both fallbacks, so 404 and 405 answers are decorated as well.
pub fn build_router(policy: CorsPolicy) -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .merge(SwaggerUi::new(routes::DOCS).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .merge(Redoc::with_url(routes::REDOC, ApiDoc::openapi()))
        // Only applies to routes registered above.
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .fallback(handlers::not_found_handler)
        .layer(middleware::from_fn_with_state(
            Arc::new(policy),
            cors::cors_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Bind the listener for the configured address. Failure here is fatal.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_address();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind listener on {}", addr))
}
