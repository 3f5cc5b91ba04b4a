//! User repository
//!
//! Database access layer for the users table.

use super::types::User;
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: MySqlPool,
}

impl UserRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get user by id
    pub async fn get(&self, id: u64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password, role, created_at, updated_at
               FROM users WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Get user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, password, role, created_at, updated_at
               FROM users WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a new user and return the stored row
    pub async fn insert(&self, name: &str, email: &str, password_hash: &str) -> Result<User> {
        let result = sqlx::query(
            r#"INSERT INTO users (name, email, password, role)
               VALUES (?, ?, ?, 'user')"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        self.get(id)
            .await?
            .ok_or_else(|| Error::Internal("Failed to get created user".to_string()))
    }
}
