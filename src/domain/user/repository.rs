//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserUpdate};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn find(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by email (for login and uniqueness checks)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user; fails with `Conflict` on a duplicate email
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace an existing user; `None` password hash keeps the stored one
    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// List all users in creation order
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}
