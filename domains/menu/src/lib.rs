//! Menu domain: menu items and per-user favorites

pub mod api;
pub mod domain;
pub mod repository;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use domain::entities::{Favorite, MenuItem, NewFavorite, NewMenuItem};
pub use repository::{MenuStore, PgMenuStore};

pub use api::routes;
pub use api::MenuState;
