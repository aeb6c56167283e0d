//! User entity and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role a user holds within the pharmacy.
///
/// `Manager` is a super-role: it satisfies every role requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Salesperson,
}

impl Role {
    /// Whether a caller holding `self` may perform an operation
    /// restricted to `required`.
    pub fn permits(self, required: Role) -> bool {
        self == required || self == Role::Manager
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Salesperson => "salesperson",
        }
    }

    /// Parse a stored role string. Unknown values fall back to the
    /// least-privileged role.
    pub fn from_str_lossy(s: &str) -> Role {
        match s {
            "manager" => Role::Manager,
            _ => Role::Salesperson,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stored user account. The password hash is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new user; the id and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Full-row replacement for an existing user. The password hash is
/// optional: `None` leaves the stored credential untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_is_super_role() {
        assert!(Role::Manager.permits(Role::Manager));
        assert!(Role::Manager.permits(Role::Salesperson));
    }

    #[test]
    fn test_salesperson_is_restricted() {
        assert!(Role::Salesperson.permits(Role::Salesperson));
        assert!(!Role::Salesperson.permits(Role::Manager));
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str_lossy("manager"), Role::Manager);
        assert_eq!(Role::from_str_lossy("salesperson"), Role::Salesperson);
        assert_eq!(Role::from_str_lossy("garbage"), Role::Salesperson);
        assert_eq!(Role::Manager.as_str(), "manager");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let parsed: Role = serde_json::from_str("\"salesperson\"").unwrap();
        assert_eq!(parsed, Role::Salesperson);
    }

    #[test]
    fn test_user_serialization_excludes_password_hash() {
        let user = User {
            id: 1,
            name: "Admin User".to_string(),
            email: "admin@pharmacy.test".to_string(),
            password_hash: "argon2-hash".to_string(),
            role: Role::Manager,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2-hash"));
        assert!(!json.contains("password_hash"));
        assert!(json.contains("admin@pharmacy.test"));
    }
}
