// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/openapi.json";
pub const DOCS: &str = "/docs";
pub const REDOC: &str = "/redoc";
