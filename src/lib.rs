//! Smart Hive backend
//!
//! REST service for beekeeping monitoring: users register apiaries and
//! hives, submit sensor/camera readings for them, and receive derived
//! alerts both by polling and over a live push channel.
//!
//! ## Architecture
//!
//! 1. Auth - registration, login, bearer-token verification
//! 2. Apiario / Colmeia - site and hive CRUD
//! 3. Registro - append-only readings, manual or simulated camera
//! 4. RuleEngine - derives at most one alert per new reading
//! 5. Alerta - alert queries and acknowledgment
//! 6. AlertBus - process-wide alert pub/sub
//! 7. WebAPI - REST endpoints plus the SSE push channel
//!
//! All services are constructed once at startup and injected into request
//! handlers through [`AppState`].

pub mod alert_bus;
pub mod alerta;
pub mod apiario;
pub mod auth;
pub mod colmeia;
pub mod error;
pub mod models;
pub mod registro;
pub mod rule_engine;
pub mod state;
pub mod web_api;

pub use error::{Error, Result};
pub use state::AppState;
