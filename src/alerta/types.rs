//! Alert types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Alert entity (alertas table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Alerta {
    pub id: u64,
    pub colmeia: Option<u64>,
    pub nivel: String,
    pub mensagem: String,
    pub origem: String,
    pub reconhecido: bool,
    pub created_at: DateTime<Utc>,
}

/// A not-yet-persisted alert, as produced by the rule engine
#[derive(Debug, Clone, PartialEq)]
pub struct NovoAlerta {
    pub colmeia: Option<u64>,
    pub nivel: String,
    pub mensagem: String,
    pub origem: String,
}

/// Query parameters for the alert listing
#[derive(Debug, Default, Deserialize)]
pub struct AlertaQuery {
    pub colmeia: Option<u64>,
    /// `aberto=true` restricts the listing to unacknowledged alerts
    pub aberto: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_alerta_wire_field_names() {
        let alerta = Alerta {
            id: 9,
            colmeia: Some(3),
            nivel: "warning".to_string(),
            mensagem: "Baixo fluxo de entrada de abelhas".to_string(),
            origem: "motor-alerta".to_string(),
            reconhecido: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&alerta).unwrap();
        assert_eq!(json["nivel"], "warning");
        assert_eq!(json["mensagem"], "Baixo fluxo de entrada de abelhas");
        assert_eq!(json["reconhecido"], false);
        assert_eq!(json["colmeia"], 3);
    }

    #[test]
    fn test_alerta_query_defaults_to_unfiltered() {
        let query = AlertaQuery::default();
        assert_eq!(query.colmeia, None);
        assert!(query.aberto.is_none());
    }
}
