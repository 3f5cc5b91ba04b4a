//! Hive service

use super::repository::ColmeiaRepository;
use super::types::{
    Colmeia, CreateColmeiaRequest, UpdateColmeiaRequest, ESPECIE_PADRAO, ESTADOS_VALIDOS,
};
use crate::error::{Error, Result};
use sqlx::MySqlPool;

/// Hive service
pub struct ColmeiaService {
    repo: ColmeiaRepository,
}

impl ColmeiaService {
    /// Create new service
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repo: ColmeiaRepository::new(pool),
        }
    }

    /// List hives, newest first, optionally filtered by apiary
    pub async fn list(&self, apiario: Option<u64>) -> Result<Vec<Colmeia>> {
        self.repo.list(apiario).await
    }

    /// Create a hive. Missing required fields are reported together.
    pub async fn create(&self, req: CreateColmeiaRequest) -> Result<Colmeia> {
        let identificador = req
            .identificador
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let especie = req
            .especie
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| ESPECIE_PADRAO.to_string());

        let (identificador, apiario) = match (identificador, req.apiario) {
            (Some(i), Some(a)) => (i, a),
            (i, a) => {
                let mut faltando = Vec::new();
                if i.is_none() {
                    faltando.push("identificador");
                }
                if a.is_none() {
                    faltando.push("apiario");
                }
                return Err(Error::Validation(format!(
                    "Campos obrigatórios ausentes: {}",
                    faltando.join(", ")
                )));
            }
        };

        let colmeia = self.repo.insert(&identificador, &especie, apiario).await?;
        tracing::info!(
            colmeia_id = colmeia.id,
            apiario = colmeia.apiario,
            "Hive created"
        );
        Ok(colmeia)
    }

    /// Update a hive
    pub async fn update(&self, id: u64, req: UpdateColmeiaRequest) -> Result<Colmeia> {
        if let Some(estado) = req.estado.as_deref() {
            if !ESTADOS_VALIDOS.contains(&estado) {
                return Err(Error::Validation(format!("estado inválido: {}", estado)));
            }
        }

        self.repo
            .update(
                id,
                req.identificador.as_deref(),
                req.especie.as_deref(),
                req.estado.as_deref(),
            )
            .await?
            .ok_or_else(|| Error::NotFound("Não encontrado".to_string()))
    }

    /// Delete a hive
    pub async fn delete(&self, id: u64) -> Result<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound("Não encontrado".to_string()))
        }
    }
}
