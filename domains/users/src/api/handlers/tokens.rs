//! Token issuance handler
//!
//! - POST /jwt - Sign an access token for the given identity

use axum::{extract::State, Json};
use letseat_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error::ApiError;
use crate::api::state::UsersState;

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /jwt - Sign an access token valid for the configured lifetime
pub async fn issue_token(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth.issue_token(&request.email)?;
    Ok(Json(TokenResponse { token }))
}
