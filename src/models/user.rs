//! User model

use serde::{Deserialize, Serialize};

/// A registered competitor as returned by the user directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub city: String,
    pub team: String,
    pub role: Role,
    pub id: String,
}

/// User role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Get role as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => crate::constants::roles::USER,
            Self::Admin => crate::constants::roles::ADMIN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_directory_user() {
        let user: User = serde_json::from_str(
            r#"{"username":"julia","city":"Kraków","team":"Tyniec Team","role":"ADMIN","id":"0-1"}"#,
        )
        .unwrap();

        assert_eq!(user.username, "julia");
        assert!(user.is_admin());
    }

    #[test]
    fn test_regular_user_is_not_admin() {
        let user = User {
            username: "joe".to_string(),
            city: "London".to_string(),
            team: "London Team".to_string(),
            role: Role::User,
            id: "0-2".to_string(),
        };

        assert!(!user.is_admin());
        assert_eq!(user.role.to_string(), "USER");
    }
}
