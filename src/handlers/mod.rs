pub mod fallback;
pub mod health;
pub mod root;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use root::root_handler;
