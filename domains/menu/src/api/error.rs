//! Error type returned by menu handlers

use axum::response::{IntoResponse, Response};
use letseat_auth::AuthError;
use letseat_common::{Error, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Common(#[from] Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Common(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Auth(e) => e.into_response(),
            ApiError::Common(e) => e.into_response(),
        }
    }
}
