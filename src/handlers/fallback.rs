use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for paths no route matches
///
/// Answers 404 with `{"detail": "Not Found"}` for any method.
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::NotFound
}

/// Fallback for known paths hit with a method they do not serve
///
/// The router still adds the `Allow` header listing the served methods.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    tracing::debug!("{} not allowed on {}", method, uri.path());
    ApiError::MethodNotAllowed
}
