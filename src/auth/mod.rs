//! Registration, login and bearer-token verification
//!
//! Passwords are stored as bcrypt hashes; sessions are stateless HS256
//! tokens with a 12-hour expiry. Handlers get the caller's identity
//! through the [`AuthUser`] extractor.

mod extractor;
mod repository;
mod service;
mod types;

pub use extractor::AuthUser;
pub use repository::UserRepository;
pub use service::AuthService;
pub use types::*;
