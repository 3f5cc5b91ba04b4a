//! Hive CRUD

mod repository;
mod service;
mod types;

pub use repository::ColmeiaRepository;
pub use service::ColmeiaService;
pub use types::*;
