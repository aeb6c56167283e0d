//! Purchase domain: inbound stock movements

pub mod entity;
pub mod repository;

pub use entity::{NewPurchase, Purchase, PurchaseStatus};
pub use repository::PurchaseRepository;
