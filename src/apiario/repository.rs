//! Apiary repository
//!
//! Database access layer for the apiarios table. Every query carries the
//! owner id so rows outside the caller's scope are never observable.

use super::types::Apiario;
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Apiary repository for database operations
#[derive(Clone)]
pub struct ApiarioRepository {
    pool: MySqlPool,
}

impl ApiarioRepository {
    /// Create new repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Get an apiary owned by the given user
    pub async fn get_owned(&self, id: u64, owner: u64) -> Result<Option<Apiario>> {
        let apiario = sqlx::query_as::<_, Apiario>(
            r#"SELECT id, nome, localizacao, descricao, owner, created_at, updated_at
               FROM apiarios WHERE id = ? AND owner = ?"#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        Ok(apiario)
    }

    /// List a user's apiaries, newest first
    pub async fn list_by_owner(&self, owner: u64) -> Result<Vec<Apiario>> {
        let apiarios = sqlx::query_as::<_, Apiario>(
            r#"SELECT id, nome, localizacao, descricao, owner, created_at, updated_at
               FROM apiarios
               WHERE owner = ?
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(apiarios)
    }

    /// Insert a new apiary and return the stored row
    pub async fn insert(
        &self,
        nome: &str,
        localizacao: &str,
        descricao: Option<&str>,
        owner: u64,
    ) -> Result<Apiario> {
        let result = sqlx::query(
            r#"INSERT INTO apiarios (nome, localizacao, descricao, owner)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(nome)
        .bind(localizacao)
        .bind(descricao)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id();
        self.get_owned(id, owner)
            .await?
            .ok_or_else(|| Error::Internal("Failed to get created apiary".to_string()))
    }

    /// Update an apiary owned by the given user; absent fields keep their
    /// current value
    pub async fn update_owned(
        &self,
        id: u64,
        owner: u64,
        nome: Option<&str>,
        localizacao: Option<&str>,
        descricao: Option<&str>,
    ) -> Result<Option<Apiario>> {
        let current = match self.get_owned(id, owner).await? {
            Some(a) => a,
            None => return Ok(None),
        };

        let nome = nome.unwrap_or(&current.nome);
        let localizacao = localizacao.unwrap_or(&current.localizacao);
        let descricao = descricao.or(current.descricao.as_deref());

        sqlx::query(
            r#"UPDATE apiarios SET nome = ?, localizacao = ?, descricao = ?
               WHERE id = ? AND owner = ?"#,
        )
        .bind(nome)
        .bind(localizacao)
        .bind(descricao)
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await?;

        self.get_owned(id, owner).await
    }

    /// Delete an apiary owned by the given user. Returns whether a row was
    /// removed. Children (hives, records, alerts) are left in place.
    pub async fn delete_owned(&self, id: u64, owner: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM apiarios WHERE id = ? AND owner = ?")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
