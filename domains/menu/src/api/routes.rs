//! Route definitions for the menu domain API

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{favorites, menu};
use super::state::MenuState;

/// Public browsing plus admin-only changes
fn menu_routes() -> Router<MenuState> {
    Router::new()
        .route("/menu", get(menu::list_menu).post(menu::create_menu_item))
        .route(
            "/menu/{id}",
            get(menu::get_menu_item).delete(menu::delete_menu_item),
        )
}

/// Favorites scoped to the calling user
fn favorite_routes() -> Router<MenuState> {
    Router::new()
        .route(
            "/favorites",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/{id}", delete(favorites::delete_favorite))
}

/// Create all menu domain API routes
pub fn routes() -> Router<MenuState> {
    Router::new().merge(menu_routes()).merge(favorite_routes())
}
