//! Users domain: user records, admin role management, token issuance

pub mod api;
pub mod domain;
pub mod repository;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use domain::entities::{NewUser, User};
pub use repository::{InsertOutcome, PgUserStore, UserStore};

pub use api::routes;
pub use api::UsersState;
