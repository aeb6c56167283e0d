//! Order infrastructure

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresOrderRepository;
pub use service::{CreateOrderRequest, OrderService};
