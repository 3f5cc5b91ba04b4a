//! Alert repository
//!
//! Database access layer for the alertas table.

use super::types::{Alerta, NovoAlerta};
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Listing cap, newest first
const LIST_LIMIT: u32 = 200;

/// Alert repository for database operations
#[derive(Clone)]
pub struct AlertaRepository {
    pool: MySqlPool,
}

impl AlertaRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get alert by id
    pub async fn get(&self, id: u64) -> Result<Option<Alerta>> {
        let alerta = sqlx::query_as::<_, Alerta>(
            r#"SELECT id, colmeia, nivel, mensagem, origem, reconhecido, created_at
               FROM alertas WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(alerta)
    }

    /// List alerts, newest first, optionally filtered by hive and/or
    /// restricted to unacknowledged ones
    pub async fn list(&self, colmeia: Option<u64>, somente_abertos: bool) -> Result<Vec<Alerta>> {
        let alertas = match (colmeia, somente_abertos) {
            (Some(colmeia), true) => {
                sqlx::query_as::<_, Alerta>(
                    r#"SELECT id, colmeia, nivel, mensagem, origem, reconhecido, created_at
                       FROM alertas
                       WHERE colmeia = ? AND reconhecido = FALSE
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(colmeia)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(colmeia), false) => {
                sqlx::query_as::<_, Alerta>(
                    r#"SELECT id, colmeia, nivel, mensagem, origem, reconhecido, created_at
                       FROM alertas
                       WHERE colmeia = ?
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(colmeia)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (None, true) => {
                sqlx::query_as::<_, Alerta>(
                    r#"SELECT id, colmeia, nivel, mensagem, origem, reconhecido, created_at
                       FROM alertas
                       WHERE reconhecido = FALSE
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (None, false) => {
                sqlx::query_as::<_, Alerta>(
                    r#"SELECT id, colmeia, nivel, mensagem, origem, reconhecido, created_at
                       FROM alertas
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(alertas)
    }

    /// Insert a new alert and return the stored row
    pub async fn insert(&self, novo: &NovoAlerta) -> Result<Alerta> {
        let result = sqlx::query(
            r#"INSERT INTO alertas (colmeia, nivel, mensagem, origem, reconhecido)
               VALUES (?, ?, ?, ?, FALSE)"#,
        )
        .bind(novo.colmeia)
        .bind(&novo.nivel)
        .bind(&novo.mensagem)
        .bind(&novo.origem)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        self.get(id)
            .await?
            .ok_or_else(|| Error::Internal("Failed to get created alert".to_string()))
    }

    /// Set reconhecido = TRUE. Unconditional, so acknowledging an already
    /// acknowledged alert stays a no-op success.
    pub async fn acknowledge(&self, id: u64) -> Result<Option<Alerta>> {
        sqlx::query("UPDATE alertas SET reconhecido = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get(id).await
    }
}
