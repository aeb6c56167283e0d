//! Product domain: catalog entries and the restock band

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Product, ProductDraft};
pub use repository::ProductRepository;
pub use validation::{validate_product, ProductValidationError};
