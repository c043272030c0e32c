//! Persistence for the users domain

pub mod users;

pub use users::{InsertOutcome, PgUserStore, UserStore};
