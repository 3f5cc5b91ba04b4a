//! Hive observation records
//!
//! ## Responsibilities
//!
//! - Persist sensor/camera readings (registros table)
//! - Simulated-camera readings for demos and testing
//! - Run the rule engine over each new record and publish derived alerts
//!
//! Records are append-only: there is no update or delete path.

mod repository;
mod service;
mod types;

pub use repository::RegistroRepository;
pub use service::RegistroService;
pub use types::*;
