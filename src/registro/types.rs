//! Record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Record kinds accepted by the API
pub const TIPOS_VALIDOS: &[&str] = &["entrada", "saida", "predador", "temperatura", "umidade"];

/// Record origins accepted by the API
pub const ORIGENS_VALIDAS: &[&str] = &["camera", "manual"];

/// Record entity (registros table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registro {
    pub id: u64,
    pub colmeia: u64,
    pub tipo: String,
    pub valor: f64,
    pub origem: String,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Canonical shape of a record about to be persisted
#[derive(Debug, Clone)]
pub struct NovoRegistro {
    pub colmeia: u64,
    pub tipo: String,
    pub valor: f64,
    pub origem: String,
    pub metadata: serde_json::Value,
}

/// Body of `POST /api/registros`
///
/// `colmeia` accepts a number or a numeric string; a non-numeric `valor`
/// is treated as absent (the stored value then defaults to 0).
#[derive(Debug, Deserialize)]
pub struct CreateRegistroRequest {
    #[serde(default, deserialize_with = "crate::models::flexible_id")]
    pub colmeia: Option<u64>,
    pub tipo: Option<String>,
    #[serde(default, deserialize_with = "valor_lenient")]
    pub valor: Option<f64>,
    pub origem: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Body of `POST /api/registros/simulate`
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    #[serde(default, deserialize_with = "crate::models::flexible_id")]
    pub colmeia: Option<u64>,
}

/// Query parameters for the record listing
#[derive(Debug, Default, Deserialize)]
pub struct RegistroQuery {
    pub colmeia: Option<u64>,
}

/// Accept any JSON for `valor` but only keep numbers
fn valor_lenient<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_full_body() {
        let req: CreateRegistroRequest = serde_json::from_str(
            r#"{"colmeia": "7", "tipo": "entrada", "valor": 2, "origem": "manual", "metadata": {"obs": "x"}}"#,
        )
        .unwrap();
        assert_eq!(req.colmeia, Some(7));
        assert_eq!(req.tipo.as_deref(), Some("entrada"));
        assert_eq!(req.valor, Some(2.0));
        assert_eq!(req.origem.as_deref(), Some("manual"));
        assert_eq!(req.metadata.unwrap()["obs"], "x");
    }

    #[test]
    fn test_create_request_non_numeric_valor_is_dropped() {
        let req: CreateRegistroRequest =
            serde_json::from_str(r#"{"colmeia": 7, "tipo": "saida", "valor": "muitas"}"#).unwrap();
        assert_eq!(req.valor, None);
    }

    #[test]
    fn test_create_request_minimal_body() {
        let req: CreateRegistroRequest =
            serde_json::from_str(r#"{"colmeia": 7, "tipo": "predador"}"#).unwrap();
        assert_eq!(req.valor, None);
        assert!(req.origem.is_none());
        assert!(req.metadata.is_none());
    }

    #[test]
    fn test_tipos_validos_cover_the_enumeration() {
        for tipo in ["entrada", "saida", "predador", "temperatura", "umidade"] {
            assert!(TIPOS_VALIDOS.contains(&tipo));
        }
        assert!(!TIPOS_VALIDOS.contains(&"polinizacao"));
    }
}
