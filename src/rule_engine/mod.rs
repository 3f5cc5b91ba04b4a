//! Rule engine - alert derivation
//!
//! ## Responsibilities
//!
//! - Inspect a just-persisted record and decide whether it warrants an alert
//!
//! Rules are evaluated in a fixed order and the first match wins: at most
//! one alert is ever derived from a single record, even if more rules are
//! added later. Persisting and publishing the derived alert is the record
//! service's job, not this module's.

use crate::alerta::NovoAlerta;
use crate::registro::Registro;

/// Inbound flow below this value is considered abnormally low
const FLUXO_ENTRADA_MINIMO: f64 = 3.0;

/// Evaluate a persisted record against the alert rules.
///
/// | tipo        | condition   | alert                       |
/// |-------------|-------------|-----------------------------|
/// | predador    | always      | danger, origem "camera"     |
/// | entrada     | valor < 3   | warning, origem "motor-alerta" |
/// | entrada     | valor >= 3  | none                        |
/// | anything else | -         | none                        |
pub fn avaliar(registro: &Registro) -> Option<NovoAlerta> {
    if registro.tipo == "predador" {
        return Some(NovoAlerta {
            colmeia: Some(registro.colmeia),
            nivel: "danger".to_string(),
            mensagem: "Possível predador detectado na entrada da colmeia".to_string(),
            origem: "camera".to_string(),
        });
    }

    if registro.tipo == "entrada" && registro.valor < FLUXO_ENTRADA_MINIMO {
        return Some(NovoAlerta {
            colmeia: Some(registro.colmeia),
            nivel: "warning".to_string(),
            mensagem: "Baixo fluxo de entrada de abelhas".to_string(),
            origem: "motor-alerta".to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn registro(tipo: &str, valor: f64) -> Registro {
        Registro {
            id: 1,
            colmeia: 10,
            tipo: tipo.to_string(),
            valor,
            origem: "manual".to_string(),
            metadata: serde_json::json!({}),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_predador_raises_danger() {
        let alerta = avaliar(&registro("predador", 1.0)).unwrap();
        assert_eq!(alerta.nivel, "danger");
        assert_eq!(alerta.origem, "camera");
        assert_eq!(alerta.colmeia, Some(10));
        assert!(alerta.mensagem.contains("predador"));
    }

    #[test]
    fn test_low_inbound_flow_raises_warning() {
        let alerta = avaliar(&registro("entrada", 2.0)).unwrap();
        assert_eq!(alerta.nivel, "warning");
        assert_eq!(alerta.origem, "motor-alerta");

        let alerta = avaliar(&registro("entrada", 0.0)).unwrap();
        assert_eq!(alerta.nivel, "warning");
    }

    #[test]
    fn test_normal_inbound_flow_is_quiet() {
        assert!(avaliar(&registro("entrada", 3.0)).is_none());
        assert!(avaliar(&registro("entrada", 5.0)).is_none());
    }

    #[test]
    fn test_other_kinds_never_alert() {
        assert!(avaliar(&registro("saida", 0.0)).is_none());
        assert!(avaliar(&registro("temperatura", 45.0)).is_none());
        assert!(avaliar(&registro("umidade", 5.0)).is_none());
    }

    #[test]
    fn test_predador_with_low_value_raises_exactly_one() {
        // both rule conditions cannot hold at once, but the first-match
        // contract must survive rule additions
        let alerta = avaliar(&registro("predador", 0.0)).unwrap();
        assert_eq!(alerta.nivel, "danger");
    }
}
