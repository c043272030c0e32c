//! Concrete authentication backend
//!
//! Holds the signing configuration and the user directory, both injected at
//! startup. Router states expose it via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::jwt::{issue_token, validate_token};
use crate::types::UserRecord;

#[derive(Clone)]
pub struct AuthBackend {
    directory: Arc<dyn UserDirectory>,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(directory: Arc<dyn UserDirectory>, config: AuthConfig) -> Self {
        Self { directory, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Sign a token for `email`, valid for the configured lifetime.
    pub fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = TokenClaims::new(email, now, self.config.token_ttl_secs);

        let token = issue_token(&claims, &self.config)?;
        tracing::debug!(email = %email, exp = claims.exp, "Issued access token");
        Ok(token)
    }

    /// Stage 1: verify a raw token. No I/O.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        validate_token(token, &self.config)
    }

    /// Stage 2: admit only claims whose stored user holds the `Admin` role.
    ///
    /// Trusts `claims`; callers must have run `verify_token` first.
    pub async fn authorize_admin(&self, claims: &TokenClaims) -> Result<UserRecord, AuthError> {
        let record = self
            .directory
            .find_user_by_email(&claims.email)
            .await?
            .ok_or_else(|| {
                tracing::debug!(email = %claims.email, "Admin check failed: no such user");
                AuthError::Forbidden
            })?;

        if !record.is_admin() {
            tracing::debug!(email = %claims.email, "Admin check failed: not an admin");
            return Err(AuthError::Forbidden);
        }

        Ok(record)
    }
}
