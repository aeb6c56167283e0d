//! API middleware

pub mod user_auth;

pub use user_auth::{extract_bearer_token, AuthUser, RequireManager};
