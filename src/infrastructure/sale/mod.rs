//! Sale infrastructure

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresSaleRepository;
pub use service::{RecordSaleRequest, SaleService};
