//! Product infrastructure

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresProductRepository;
pub use service::ProductService;
