//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default lifetime of an issued access token (one hour)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Shared secret used to sign and verify access tokens
    pub access_token_secret: String,

    /// Lifetime of issued access tokens, in seconds
    pub token_ttl_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("access_token_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token_secret = lookup("ACCESS_TOKEN_SECRET")
            .ok_or_else(|| anyhow::anyhow!("ACCESS_TOKEN_SECRET is required"))?;
        if access_token_secret.is_empty() {
            anyhow::bail!("ACCESS_TOKEN_SECRET must not be empty");
        }

        let config = Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?,
            access_token_secret,
            token_ttl_secs: lookup("TOKEN_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "letseat=debug".to_string()),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(config)
    }
}
