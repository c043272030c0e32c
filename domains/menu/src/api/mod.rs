//! API layer for the menu domain

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::routes;
pub use state::MenuState;
