//! Menu API handlers
//!
//! - GET /menu - Browse the menu (public)
//! - GET /menu/{id} - One dish (public)
//! - POST /menu - Add a dish (admin)
//! - DELETE /menu/{id} - Remove a dish (admin)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use letseat_auth::AdminUser;
use letseat_common::{Error, Pagination, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::state::MenuState;
use crate::domain::entities::{MenuItem, NewMenuItem};

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl MenuQuery {
    fn page(&self) -> Pagination {
        Pagination {
            offset: self.offset,
            limit: self.limit,
        }
    }
}

/// GET /menu - Browse the menu
pub async fn list_menu(
    State(state): State<MenuState>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state
        .store
        .list_items(query.category.as_deref(), query.page())
        .await?;
    Ok(Json(items))
}

/// GET /menu/{id} - One dish
pub async fn get_menu_item(
    State(state): State<MenuState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MenuItem>, ApiError> {
    let item = state
        .store
        .get_item(id)
        .await?
        .ok_or_else(|| Error::NotFound("Menu item not found".to_string()))?;
    Ok(Json(item))
}

/// POST /menu - Add a dish
pub async fn create_menu_item(
    AdminUser(claims): AdminUser,
    State(state): State<MenuState>,
    ValidatedJson(request): ValidatedJson<NewMenuItem>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let item = state.store.insert_item(request).await?;

    tracing::info!(item_id = %item.id, added_by = %claims.email, "Menu item added");

    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /menu/{id} - Remove a dish
pub async fn delete_menu_item(
    AdminUser(claims): AdminUser,
    State(state): State<MenuState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete_item(id).await? {
        return Err(Error::NotFound("Menu item not found".to_string()).into());
    }

    tracing::info!(item_id = %id, deleted_by = %claims.email, "Menu item deleted");

    Ok(StatusCode::NO_CONTENT)
}
