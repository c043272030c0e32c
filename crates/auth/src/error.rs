//! Gate errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Reasons the gate stops a request.
///
/// Every variant is terminal for the request that raised it.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header on the request
    #[error("unauthorized access")]
    MissingAuthorization,
    /// Header present but the token is malformed, forged or expired
    #[error("unauthorized access")]
    InvalidToken,
    /// Authenticated, but not allowed to use this route
    #[error("forbidden access")]
    Forbidden,
    /// User directory lookup failed
    #[error("internal server error")]
    UserLoadError,
    /// Signing a new token failed
    #[error("internal server error")]
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::UserLoadError | AuthError::TokenIssueFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
