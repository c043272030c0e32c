//! Favorites API handlers
//!
//! - GET /favorites?email= - The caller's favorites (self only)
//! - POST /favorites - Save a dish for the caller
//! - DELETE /favorites/{id} - Remove one of the caller's favorites

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use letseat_auth::{ensure_self_match, AuthUser};
use letseat_common::{Error, RepositoryError, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::state::MenuState;
use crate::domain::entities::{Favorite, NewFavorite};

#[derive(Debug, Deserialize)]
pub struct FavoritesQuery {
    pub email: String,
}

/// GET /favorites?email= - List the caller's favorites
pub async fn list_favorites(
    AuthUser(claims): AuthUser,
    State(state): State<MenuState>,
    Query(query): Query<FavoritesQuery>,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    ensure_self_match(&claims, &query.email)?;

    let favorites = state.store.list_favorites(&query.email).await?;
    Ok(Json(favorites))
}

/// POST /favorites - Save a dish for the caller
pub async fn add_favorite(
    AuthUser(claims): AuthUser,
    State(state): State<MenuState>,
    ValidatedJson(request): ValidatedJson<NewFavorite>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    let favorite = state
        .store
        .add_favorite(&claims.email, request)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => {
                ApiError::from(Error::NotFound("Menu item not found".to_string()))
            }
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorites/{id} - Remove one of the caller's favorites
pub async fn delete_favorite(
    AuthUser(claims): AuthUser,
    State(state): State<MenuState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    // Someone else's favorite looks the same as a missing one
    if !state.store.delete_favorite(id, &claims.email).await? {
        return Err(Error::NotFound("Favorite not found".to_string()).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
