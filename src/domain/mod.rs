//! Domain layer: entities, validation rules, and repository traits.
//!
//! Everything here is storage-agnostic; the concrete Postgres
//! implementations live under `infrastructure`.

pub mod error;
pub mod order;
pub mod product;
pub mod purchase;
pub mod reporting;
pub mod sale;
pub mod user;

pub use error::DomainError;
