//! Apiary service

use super::repository::ApiarioRepository;
use super::types::{Apiario, CreateApiarioRequest, UpdateApiarioRequest};
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Apiary service
pub struct ApiarioService {
    repo: ApiarioRepository,
}

impl ApiarioService {
    /// Create new service
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repo: ApiarioRepository::new(pool),
        }
    }

    /// List the caller's apiaries, newest first
    pub async fn list(&self, owner: u64) -> Result<Vec<Apiario>> {
        self.repo.list_by_owner(owner).await
    }

    /// Create an apiary for the caller
    pub async fn create(&self, owner: u64, req: CreateApiarioRequest) -> Result<Apiario> {
        let nome = req
            .nome
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Validation("Nome é obrigatório".to_string()))?;

        let apiario = self
            .repo
            .insert(
                &nome,
                req.localizacao.as_deref().unwrap_or(""),
                req.descricao.as_deref(),
                owner,
            )
            .await?;
        tracing::info!(apiario_id = apiario.id, owner = owner, "Apiary created");
        Ok(apiario)
    }

    /// Update one of the caller's apiaries
    pub async fn update(&self, id: u64, owner: u64, req: UpdateApiarioRequest) -> Result<Apiario> {
        self.repo
            .update_owned(
                id,
                owner,
                req.nome.as_deref(),
                req.localizacao.as_deref(),
                req.descricao.as_deref(),
            )
            .await?
            .ok_or_else(|| Error::NotFound("Não encontrado".to_string()))
    }

    /// Delete one of the caller's apiaries. No cascade: the apiary's hives
    /// and their records/alerts stay behind with a dangling reference.
    pub async fn delete(&self, id: u64, owner: u64) -> Result<()> {
        if self.repo.delete_owned(id, owner).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Não encontrado".to_string()))
        }
    }
}
