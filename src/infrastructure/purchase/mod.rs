//! Purchase infrastructure

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresPurchaseRepository;
pub use service::{PurchaseService, RecordPurchaseRequest};
