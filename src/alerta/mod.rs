//! Alert queries and acknowledgment
//!
//! Alerts are created only by the rule engine as a side effect of record
//! creation; user-facing writes are limited to the acknowledge operation.

mod repository;
mod service;
mod types;

pub use repository::AlertaRepository;
pub use service::AlertaService;
pub use types::*;
