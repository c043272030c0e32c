//! Access gate for the Let's Eat API
//!
//! Two ordered stages guard protected routes:
//! 1. token verification (`AuthUser`) decodes the bearer token and attaches
//!    the claims to the request,
//! 2. role authorization (`AdminUser`) looks the claimed email up in the
//!    user directory and admits only `Admin` records.
//!
//! Both extractors work with any router state `S` where
//! `AuthBackend: FromRef<S>`.

mod backend;
mod claims;
mod config;
mod directory;
mod error;
mod extractors;
mod guard;
mod jwt;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use backend::AuthBackend;
pub use claims::TokenClaims;
pub use config::AuthConfig;
pub use directory::UserDirectory;
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser};
pub use guard::ensure_self_match;
pub use types::{Role, UserRecord};
