use crate::app::{APP_NAME, APP_VERSION};
use crate::models::WelcomeResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - Welcome message
///
/// Identifies the service and its version. Always answers 200.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is operational", body = WelcomeResponse)
    ),
    tag = "root"
)]
pub async fn root_handler() -> (StatusCode, Json<WelcomeResponse>) {
    tracing::debug!("Serving welcome message");
    (
        StatusCode::OK,
        Json(WelcomeResponse {
            message: format!("Welcome to {} API", APP_NAME),
            version: APP_VERSION.to_string(),
            status: "operational".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new().route(routes::ROOT, get(root_handler))
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: WelcomeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.message, "Welcome to Sistema-Cloud API");
        assert_eq!(response_json.version, "0.1.0");
        assert_eq!(response_json.status, "operational");
    }

    #[tokio::test]
    async fn test_root_body_field_order() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            &body[..],
            br#"{"message":"Welcome to Sistema-Cloud API","version":"0.1.0","status":"operational"}"#
        );
    }

    #[tokio::test]
    async fn test_root_post_not_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
