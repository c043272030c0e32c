//! Axum extractors for the gate
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! `AdminUser` always runs `AuthUser` first, so a request that fails token
//! verification never reaches the user directory.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::claims::TokenClaims;
use crate::error::AuthError;
use crate::jwt::extract_token;

/// Stage 1: a request carrying a valid, unexpired access token.
///
/// The decoded claims are also stored in the request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        // Already verified earlier in this request
        if let Some(claims) = parts.extensions.get::<TokenClaims>() {
            return Ok(AuthUser(claims.clone()));
        }

        let backend = AuthBackend::from_ref(state);

        let auth_header = parts.headers.get(AUTHORIZATION).ok_or_else(|| {
            tracing::debug!(path = %parts.uri.path(), "Missing authorization header");
            AuthError::MissingAuthorization
        })?;

        let token = extract_token(auth_header)?;
        let claims = backend.verify_token(token)?;

        parts.extensions.insert(claims.clone());

        Ok(AuthUser(claims))
    }
}

/// Stage 1 + 2: a verified caller whose stored role is `Admin`.
///
/// Rejects with 403 when the user is unknown or not an admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub TokenClaims);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        let backend = AuthBackend::from_ref(state);
        backend.authorize_admin(&claims).await?;

        Ok(AdminUser(claims))
    }
}
