//! Hive repository
//!
//! Database access layer for the colmeias table.

use super::types::Colmeia;
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Hive repository for database operations
#[derive(Clone)]
pub struct ColmeiaRepository {
    pool: MySqlPool,
}

impl ColmeiaRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get hive by id
    pub async fn get(&self, id: u64) -> Result<Option<Colmeia>> {
        let colmeia = sqlx::query_as::<_, Colmeia>(
            r#"SELECT id, identificador, especie, apiario, estado, created_at, updated_at
               FROM colmeias WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(colmeia)
    }

    /// List hives, newest first, optionally filtered by apiary
    pub async fn list(&self, apiario: Option<u64>) -> Result<Vec<Colmeia>> {
        let colmeias = match apiario {
            Some(apiario) => {
                sqlx::query_as::<_, Colmeia>(
                    r#"SELECT id, identificador, especie, apiario, estado, created_at, updated_at
                       FROM colmeias
                       WHERE apiario = ?
                       ORDER BY created_at DESC, id DESC"#,
                )
                .bind(apiario)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Colmeia>(
                    r#"SELECT id, identificador, especie, apiario, estado, created_at, updated_at
                       FROM colmeias
                       ORDER BY created_at DESC, id DESC"#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(colmeias)
    }

    /// Insert a new hive and return the stored row
    pub async fn insert(&self, identificador: &str, especie: &str, apiario: u64) -> Result<Colmeia> {
        let result = sqlx::query(
            r#"INSERT INTO colmeias (identificador, especie, apiario, estado)
               VALUES (?, ?, ?, 'saudável')"#,
        )
        .bind(identificador)
        .bind(especie)
        .bind(apiario)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        self.get(id)
            .await?
            .ok_or_else(|| Error::Internal("Failed to get created hive".to_string()))
    }

    /// Update a hive; absent fields keep their current value
    pub async fn update(
        &self,
        id: u64,
        identificador: Option<&str>,
        especie: Option<&str>,
        estado: Option<&str>,
    ) -> Result<Option<Colmeia>> {
        let current = match self.get(id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let identificador = identificador.unwrap_or(&current.identificador);
        let especie = especie.unwrap_or(&current.especie);
        let estado = estado.unwrap_or(&current.estado);

        sqlx::query(
            r#"UPDATE colmeias SET identificador = ?, especie = ?, estado = ? WHERE id = ?"#,
        )
        .bind(identificador)
        .bind(especie)
        .bind(estado)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Delete a hive. Returns whether a row was removed.
    pub async fn delete(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM colmeias WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
