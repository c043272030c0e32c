//! Token signing, verification and header parsing

use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign `claims` with the server secret (HS256).
pub(crate) fn issue_token(claims: &TokenClaims, config: &AuthConfig) -> Result<String, AuthError> {
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        AuthError::TokenIssueFailed
    })
}

/// Verify signature and expiry, returning the decoded claims.
pub(crate) fn validate_token(token: &str, config: &AuthConfig) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.leeway = 0;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<TokenClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Take the token segment of an `Authorization` header.
///
/// The header has the form `<scheme> <token>`; the token is everything after
/// the first space and the scheme is not interpreted.
pub(crate) fn extract_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::InvalidToken)?;

    match header_str.split_once(' ') {
        Some((_, token)) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::InvalidToken),
    }
}
