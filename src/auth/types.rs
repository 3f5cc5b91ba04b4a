//! Auth types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity (users table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bearer token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: u64,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// Body of `POST /auth/register`
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(alias = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
}

/// Response of `POST /auth/register`
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub email: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(alias = "senha")]
    pub password: Option<String>,
}

/// Public view of a user, as returned by login
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_user_password_is_never_serialized() {
        let user = User {
            id: 1,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password: "$2b$10$hash".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "maria@example.com");
    }

    #[test]
    fn test_register_request_portuguese_aliases() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"nome": "Ana", "email": "a@b.c", "senha": "s3gr3d0"}"#)
                .unwrap();
        assert_eq!(req.name.as_deref(), Some("Ana"));
        assert_eq!(req.password.as_deref(), Some("s3gr3d0"));
    }
}
