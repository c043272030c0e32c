//! Route definitions for the users domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{tokens, users};
use super::state::UsersState;

/// Token issuance
fn token_routes() -> Router<UsersState> {
    Router::new().route("/jwt", post(tokens::issue_token))
}

/// Registration and role management
fn user_routes() -> Router<UsersState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/admin/{email}",
            get(users::check_admin).patch(users::make_admin),
        )
        .route("/users/{email}", delete(users::delete_user))
}

/// Create all users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new().merge(token_routes()).merge(user_routes())
}
