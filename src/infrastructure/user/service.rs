//! User service: account management and credential checks

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::user::{
    validate_email, validate_name, validate_password, NewUser, Role, User, UserRepository,
    UserUpdate,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Request for updating a user. A missing `password` leaves the
/// stored credential hash unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub password: Option<String>,
}

/// User service over a repository and a password hasher
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        self.repository
            .create(NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: request.role,
            })
            .await
    }

    /// Check credentials; returns `None` for an unknown email or a
    /// wrong password, without distinguishing the two.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.find_by_email(email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, &user.password_hash) {
            debug!(email = %email, "Password verification failed");
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> Result<User, DomainError> {
        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        let password_hash = match &request.password {
            Some(password) => {
                validate_password(password)
                    .map_err(|e| DomainError::validation(e.to_string()))?;
                Some(self.hasher.hash(password)?)
            }
            None => None,
        };

        self.repository
            .update(
                id,
                UserUpdate {
                    name: request.name,
                    email: request.email,
                    role: request.role,
                    password_hash,
                },
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.repository.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }
}
