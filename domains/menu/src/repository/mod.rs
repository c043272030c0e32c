//! Persistence for the menu domain

pub mod menu;

pub use menu::{MenuStore, PgMenuStore};
