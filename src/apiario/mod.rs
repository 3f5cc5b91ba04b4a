//! Apiary CRUD
//!
//! Every operation is scoped to the authenticated owner: an apiary that
//! belongs to someone else behaves exactly like one that does not exist.

mod repository;
mod service;
mod types;

pub use repository::ApiarioRepository;
pub use service::ApiarioService;
pub use types::*;
