//! Access token claims

use serde::{Deserialize, Serialize};

/// Identity claim carried by an access token.
///
/// Lives only for the duration of one request once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Email of the user the token was issued to
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expires at (unix seconds)
    pub exp: u64,
}

impl TokenClaims {
    /// Claims for `email` issued at `now`, valid for `ttl_secs`.
    pub fn new(email: impl Into<String>, now: u64, ttl_secs: u64) -> Self {
        Self {
            email: email.into(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        }
    }
}
