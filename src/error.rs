use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Errors surfaced to clients.
///
/// Only routing misses are in scope.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path
    NotFound,
    /// The path exists but has no handler for the request method
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
        };

        let body = Json(ErrorResponse {
            detail: detail.to_string(),
        });

        (status, body).into_response()
    }
}
