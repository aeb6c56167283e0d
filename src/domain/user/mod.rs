//! User domain: accounts, roles, validation, and storage contract

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{NewUser, Role, User, UserUpdate};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_name, validate_password, UserValidationError};
