//! Token-based authentication infrastructure

pub mod jwt;

pub use jwt::{Claims, JwtAuthority, JwtConfig, JwtService};
