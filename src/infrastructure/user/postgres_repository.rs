//! PostgreSQL user repository

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, Role, User, UserRepository, UserUpdate};
use crate::domain::DomainError;

const USER_COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

/// PostgreSQL implementation of `UserRepository`
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::conflict(format!("Email '{}' already exists", user.email))
            }
            _ => DomainError::storage(format!("Failed to create user: {}", e)),
        })?;

        Ok(row_to_user(&row))
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError> {
        // Two statement shapes: the password hash is only replaced
        // when the caller supplied a new password.
        let result = match &update.password_hash {
            Some(hash) => {
                sqlx::query(&format!(
                    r#"
                    UPDATE users
                    SET name = $2, email = $3, role = $4, password_hash = $5, updated_at = NOW()
                    WHERE id = $1
                    RETURNING {}
                    "#,
                    USER_COLUMNS
                ))
                .bind(id)
                .bind(&update.name)
                .bind(&update.email)
                .bind(update.role.as_str())
                .bind(hash)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query(&format!(
                    r#"
                    UPDATE users
                    SET name = $2, email = $3, role = $4, updated_at = NOW()
                    WHERE id = $1
                    RETURNING {}
                    "#,
                    USER_COLUMNS
                ))
                .bind(id)
                .bind(&update.name)
                .bind(&update.email)
                .bind(update.role.as_str())
                .fetch_optional(&self.pool)
                .await
            }
        };

        let row = result.map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::conflict(format!("Email '{}' already exists", update.email))
            }
            _ => DomainError::storage(format!("Failed to update user: {}", e)),
        })?;

        match row {
            Some(row) => Ok(row_to_user(&row)),
            None => Err(DomainError::not_found(format!("User {} not found", id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    DomainError::conflict(format!(
                        "User {} is referenced by existing sales and cannot be deleted",
                        id
                    ))
                }
                _ => DomainError::storage(format!("Failed to delete user: {}", e)),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM users ORDER BY created_at",
            USER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        Ok(rows.iter().map(row_to_user).collect())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    let role: String = row.get("role");

    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role: Role::from_str_lossy(&role),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
