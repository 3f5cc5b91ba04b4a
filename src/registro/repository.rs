//! Record repository
//!
//! Database access layer for the registros table.

use super::types::{NovoRegistro, Registro};
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Listing cap, newest first
const LIST_LIMIT: u32 = 500;

/// Record repository for database operations
#[derive(Clone)]
pub struct RegistroRepository {
    pool: MySqlPool,
}

impl RegistroRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get record by id
    pub async fn get(&self, id: u64) -> Result<Option<Registro>> {
        let registro = sqlx::query_as::<_, Registro>(
            r#"SELECT id, colmeia, tipo, valor, origem, metadata, created_at
               FROM registros WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(registro)
    }

    /// List records, newest first, optionally filtered by hive
    pub async fn list(&self, colmeia: Option<u64>) -> Result<Vec<Registro>> {
        let registros = match colmeia {
            Some(colmeia) => {
                sqlx::query_as::<_, Registro>(
                    r#"SELECT id, colmeia, tipo, valor, origem, metadata, created_at
                       FROM registros
                       WHERE colmeia = ?
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(colmeia)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Registro>(
                    r#"SELECT id, colmeia, tipo, valor, origem, metadata, created_at
                       FROM registros
                       ORDER BY created_at DESC, id DESC
                       LIMIT ?"#,
                )
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(registros)
    }

    /// Insert a new record and return the stored row
    pub async fn insert(&self, novo: &NovoRegistro) -> Result<Registro> {
        let result = sqlx::query(
            r#"INSERT INTO registros (colmeia, tipo, valor, origem, metadata)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(novo.colmeia)
        .bind(&novo.tipo)
        .bind(novo.valor)
        .bind(&novo.origem)
        .bind(novo.metadata.to_string())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        self.get(id)
            .await?
            .ok_or_else(|| Error::Internal("Failed to get created record".to_string()))
    }
}
