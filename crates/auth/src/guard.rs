//! Per-route identity check for user-scoped endpoints

use crate::claims::TokenClaims;
use crate::error::AuthError;

/// Require that `email` names the caller.
///
/// Strict string equality against the verified claim; anything else is
/// `Forbidden`.
pub fn ensure_self_match(claims: &TokenClaims, email: &str) -> Result<(), AuthError> {
    if email != claims.email {
        tracing::debug!(
            requested = %email,
            claimed = %claims.email,
            "Rejected request for another user's data"
        );
        return Err(AuthError::Forbidden);
    }
    Ok(())
}
