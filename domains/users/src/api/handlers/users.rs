//! User management API handlers
//!
//! - POST /users - Register a user (no-op if the email is taken)
//! - GET /users - List users (admin)
//! - GET /users/admin/{email} - Whether the caller is an admin (self only)
//! - PATCH /users/admin/{email} - Grant the admin role (admin)
//! - DELETE /users/{email} - Remove a user (admin)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use letseat_auth::{ensure_self_match, AdminUser, AuthUser, Role};
use letseat_common::{Error, Pagination, ValidatedJson};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::state::UsersState;
use crate::domain::entities::{NewUser, User};
use crate::repository::InsertOutcome;

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub inserted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub admin: bool,
}

/// POST /users - Register a user
pub async fn create_user(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<NewUser>,
) -> Result<Response, ApiError> {
    let email = request.email.clone();

    let response = match state.store.insert(request).await? {
        InsertOutcome::Created(user) => {
            tracing::info!(email = %email, "User registered");
            let body = CreateUserResponse {
                inserted: true,
                user: Some(user),
                message: None,
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        InsertOutcome::AlreadyExists => {
            let body = CreateUserResponse {
                inserted: false,
                user: None,
                message: Some("user already exists"),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
    };

    Ok(response)
}

/// GET /users - List users
pub async fn list_users(
    AdminUser(_): AdminUser,
    State(state): State<UsersState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list(page).await?;
    Ok(Json(users))
}

/// GET /users/admin/{email} - Whether the caller holds the admin role
pub async fn check_admin(
    AuthUser(claims): AuthUser,
    State(state): State<UsersState>,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, ApiError> {
    ensure_self_match(&claims, &email)?;

    let admin = state
        .store
        .find_by_email(&email)
        .await?
        .is_some_and(|user| user.is_admin());

    Ok(Json(AdminStatusResponse { admin }))
}

/// PATCH /users/admin/{email} - Grant the admin role
pub async fn make_admin(
    AdminUser(claims): AdminUser,
    State(state): State<UsersState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .store
        .set_role(&email, Role::Admin)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(email = %email, granted_by = %claims.email, "Admin role granted");

    Ok(Json(user))
}

/// DELETE /users/{email} - Remove a user
pub async fn delete_user(
    AdminUser(claims): AdminUser,
    State(state): State<UsersState>,
    Path(email): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(&email).await? {
        return Err(Error::NotFound("User not found".to_string()).into());
    }

    tracing::info!(email = %email, deleted_by = %claims.email, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
