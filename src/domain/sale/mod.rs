//! Sale domain: the transactional stock-decrement path

pub mod entity;
pub mod repository;

pub use entity::{NewSale, Sale};
pub use repository::SaleRepository;
