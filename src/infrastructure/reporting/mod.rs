//! Reporting infrastructure

pub mod postgres_repository;
pub mod service;

pub use postgres_repository::PostgresReportingRepository;
pub use service::ReportingService;
