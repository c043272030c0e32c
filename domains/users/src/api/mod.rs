//! API layer for the users domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::routes;
pub use state::UsersState;
