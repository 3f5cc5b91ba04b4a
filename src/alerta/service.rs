//! Alert service

use super::repository::AlertaRepository;
use super::types::{Alerta, NovoAlerta};
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Alert service
pub struct AlertaService {
    repo: AlertaRepository,
}

impl AlertaService {
    /// Create new service
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repo: AlertaRepository::new(pool),
        }
    }

    /// List alerts, newest first, capped at 200
    pub async fn list(&self, colmeia: Option<u64>, somente_abertos: bool) -> Result<Vec<Alerta>> {
        self.repo.list(colmeia, somente_abertos).await
    }

    /// Persist a rule-engine alert
    pub async fn create(&self, novo: &NovoAlerta) -> Result<Alerta> {
        let alerta = self.repo.insert(novo).await?;
        tracing::info!(
            alerta_id = alerta.id,
            nivel = %alerta.nivel,
            colmeia = ?alerta.colmeia,
            "Alert created"
        );
        Ok(alerta)
    }

    /// Acknowledge an alert. Idempotent; unknown id is a not-found.
    pub async fn acknowledge(&self, id: u64) -> Result<Alerta> {
        self.repo
            .acknowledge(id)
            .await?
            .ok_or_else(|| Error::NotFound("Não encontrado".to_string()))
    }
}
