//! Hive types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Default species label for new hives
pub const ESPECIE_PADRAO: &str = "Abelha nativa sem ferrão";

/// Hive health states accepted by the API
pub const ESTADOS_VALIDOS: &[&str] = &["saudável", "atenção", "critico"];

/// Hive entity (colmeias table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Colmeia {
    pub id: u64,
    pub identificador: String,
    pub especie: String,
    pub apiario: u64,
    pub estado: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/colmeias`
///
/// Accepted alias spellings (kept from the existing frontends):
/// `identificador` | `identifier` | `nome`, `especie` | `species`,
/// `apiario` | `apiary`.
#[derive(Debug, Deserialize)]
pub struct CreateColmeiaRequest {
    #[serde(alias = "identifier", alias = "nome")]
    pub identificador: Option<String>,
    #[serde(alias = "species")]
    pub especie: Option<String>,
    #[serde(
        default,
        alias = "apiary",
        deserialize_with = "crate::models::flexible_id"
    )]
    pub apiario: Option<u64>,
}

/// Body of `PUT /api/colmeias/:id`; absent fields keep their value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateColmeiaRequest {
    #[serde(alias = "identifier")]
    pub identificador: Option<String>,
    #[serde(alias = "species")]
    pub especie: Option<String>,
    pub estado: Option<String>,
}

/// Query parameters for the hive listing
#[derive(Debug, Default, Deserialize)]
pub struct ColmeiaQuery {
    pub apiario: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_canonical_names() {
        let req: CreateColmeiaRequest = serde_json::from_str(
            r#"{"identificador": "C-01", "especie": "Jataí", "apiario": 4}"#,
        )
        .unwrap();
        assert_eq!(req.identificador.as_deref(), Some("C-01"));
        assert_eq!(req.especie.as_deref(), Some("Jataí"));
        assert_eq!(req.apiario, Some(4));
    }

    #[test]
    fn test_create_request_alias_names() {
        let req: CreateColmeiaRequest =
            serde_json::from_str(r#"{"identifier": "C-02", "species": "Mandaçaia", "apiary": "9"}"#)
                .unwrap();
        assert_eq!(req.identificador.as_deref(), Some("C-02"));
        assert_eq!(req.especie.as_deref(), Some("Mandaçaia"));
        assert_eq!(req.apiario, Some(9));
    }

    #[test]
    fn test_create_request_nome_fallback() {
        let req: CreateColmeiaRequest =
            serde_json::from_str(r#"{"nome": "C-03", "apiario": 1}"#).unwrap();
        assert_eq!(req.identificador.as_deref(), Some("C-03"));
    }
}
