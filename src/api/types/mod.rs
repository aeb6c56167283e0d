//! API request/response types

pub mod error;
pub mod json;

pub use error::{ApiError, ErrorBody};
pub use json::Json;
