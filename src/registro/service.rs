//! Record service
//!
//! Persists readings and runs the alert pipeline: every stored record is
//! handed to the rule engine, a matching rule persists an alert, and the
//! stored alert is published on the bus before the caller gets its
//! response. Publishing is fire-and-forget; a stored alert stays stored no
//! matter what happens to delivery.

use super::repository::RegistroRepository;
use super::types::{NovoRegistro, Registro, ORIGENS_VALIDAS, TIPOS_VALIDOS};
use crate::alert_bus::AlertBus;
use crate::alerta::AlertaService;
use crate::error::{Error, Result};
use crate::rule_engine;
use rand::Rng;
use sqlx::MySqlPool;
use std::sync::Arc;

/// Record service
pub struct RegistroService {
    repo: RegistroRepository,
    alertas: Arc<AlertaService>,
    bus: Arc<AlertBus>,
}

impl RegistroService {
    /// Create new service
    pub fn new(pool: MySqlPool, alertas: Arc<AlertaService>, bus: Arc<AlertBus>) -> Self {
        Self {
            repo: RegistroRepository::new(pool),
            alertas,
            bus,
        }
    }

    /// List records, newest first, capped at 500
    pub async fn list(&self, colmeia: Option<u64>) -> Result<Vec<Registro>> {
        self.repo.list(colmeia).await
    }

    /// Persist a record and run the alert pipeline
    pub async fn create(&self, novo: NovoRegistro) -> Result<Registro> {
        validar(&novo)?;

        let registro = self.repo.insert(&novo).await?;
        tracing::info!(
            registro_id = registro.id,
            colmeia = registro.colmeia,
            tipo = %registro.tipo,
            valor = registro.valor,
            "Record created"
        );

        self.derivar_alerta(&registro).await?;
        Ok(registro)
    }

    /// Persist a simulated camera reading for a hive
    pub async fn simulate(&self, colmeia: u64) -> Result<Registro> {
        let (tipo, valor) = sortear_leitura(&mut rand::thread_rng());

        let novo = NovoRegistro {
            colmeia,
            tipo,
            valor,
            origem: "camera".to_string(),
            metadata: serde_json::json!({
                "simulado": true,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }),
        };

        self.create(novo).await
    }

    /// Evaluate the stored record; on a match, persist the alert and push
    /// it to the connected clients.
    async fn derivar_alerta(&self, registro: &Registro) -> Result<()> {
        if let Some(novo) = rule_engine::avaliar(registro) {
            let alerta = self.alertas.create(&novo).await?;
            self.bus.publish(&alerta).await;
        }
        Ok(())
    }
}

/// Pick a simulated reading: kind uniformly from the camera-visible kinds,
/// value 1 for a predator sighting and 0..=9 otherwise.
fn sortear_leitura(rng: &mut impl Rng) -> (String, f64) {
    const TIPOS_CAMERA: &[&str] = &["entrada", "saida", "predador"];

    let tipo = TIPOS_CAMERA[rng.gen_range(0..TIPOS_CAMERA.len())];
    let valor = if tipo == "predador" {
        1.0
    } else {
        rng.gen_range(0..10) as f64
    };

    (tipo.to_string(), valor)
}

fn validar(novo: &NovoRegistro) -> Result<()> {
    if !TIPOS_VALIDOS.contains(&novo.tipo.as_str()) {
        return Err(Error::Validation(format!("tipo inválido: {}", novo.tipo)));
    }
    if !ORIGENS_VALIDAS.contains(&novo.origem.as_str()) {
        return Err(Error::Validation(format!("origem inválida: {}", novo.origem)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sortear_leitura_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (tipo, valor) = sortear_leitura(&mut rng);
            assert!(["entrada", "saida", "predador"].contains(&tipo.as_str()));
            if tipo == "predador" {
                assert_eq!(valor, 1.0);
            } else {
                assert!((0.0..=9.0).contains(&valor));
                assert_eq!(valor.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_validar_rejects_unknown_tipo() {
        let novo = NovoRegistro {
            colmeia: 1,
            tipo: "polinizacao".to_string(),
            valor: 0.0,
            origem: "manual".to_string(),
            metadata: serde_json::json!({}),
        };
        assert!(matches!(validar(&novo), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validar_rejects_unknown_origem() {
        let novo = NovoRegistro {
            colmeia: 1,
            tipo: "entrada".to_string(),
            valor: 4.0,
            origem: "satelite".to_string(),
            metadata: serde_json::json!({}),
        };
        assert!(matches!(validar(&novo), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validar_accepts_canonical_shape() {
        for tipo in TIPOS_VALIDOS {
            let novo = NovoRegistro {
                colmeia: 1,
                tipo: tipo.to_string(),
                valor: 0.0,
                origem: "camera".to_string(),
                metadata: serde_json::json!({}),
            };
            assert!(validar(&novo).is_ok());
        }
    }
}
