pub mod auth;
pub mod cors;

pub use auth::{AuthMiddleware, current_claims};
pub use cors::create_cors;
