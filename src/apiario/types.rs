//! Apiary types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Apiary entity (apiarios table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Apiario {
    pub id: u64,
    pub nome: String,
    pub localizacao: String,
    pub descricao: Option<String>,
    pub owner: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/apiarios`
#[derive(Debug, Deserialize)]
pub struct CreateApiarioRequest {
    #[serde(alias = "name")]
    pub nome: Option<String>,
    #[serde(alias = "location")]
    pub localizacao: Option<String>,
    #[serde(alias = "description")]
    pub descricao: Option<String>,
}

/// Body of `PUT /api/apiarios/:id`; absent fields keep their value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateApiarioRequest {
    #[serde(alias = "name")]
    pub nome: Option<String>,
    #[serde(alias = "location")]
    pub localizacao: Option<String>,
    #[serde(alias = "description")]
    pub descricao: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_aliases() {
        let req: CreateApiarioRequest =
            serde_json::from_str(r#"{"name": "Sítio", "location": "MG"}"#).unwrap();
        assert_eq!(req.nome.as_deref(), Some("Sítio"));
        assert_eq!(req.localizacao.as_deref(), Some("MG"));
        assert!(req.descricao.is_none());
    }
}
