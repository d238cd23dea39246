use serde::{Deserialize, Serialize};

/// Response type for the welcome endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Response type for health check endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
