//! Common test utilities and fixtures for integration tests
//!
//! - A fully composed application over in-memory stores
//! - Token helpers, including forged and expired tokens
//! - Request builders and response parsing

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use letseat_app::{build_router, with_middleware, Stores};
use letseat_auth::{AuthConfig, Role, TokenClaims};
use letseat_menu::mock::InMemoryMenuStore;
use letseat_users::mock::InMemoryUserStore;
use serde_json::Value;
use tower::ServiceExt;

/// Signing secret used by every test app
pub const TEST_SECRET: &str = "S";

/// Composed application plus handles on its stores
pub struct TestApp {
    pub router: Router,
    pub users: InMemoryUserStore,
    pub menu: InMemoryMenuStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_users(InMemoryUserStore::new())
    }

    pub fn with_users(users: InMemoryUserStore) -> Self {
        let menu = InMemoryMenuStore::new();
        let stores = Stores {
            users: Arc::new(users.clone()),
            directory: Arc::new(users.clone()),
            menu: Arc::new(menu.clone()),
        };
        let router = with_middleware(
            build_router(stores, AuthConfig::new(TEST_SECRET)),
            Duration::from_secs(5),
        );

        Self {
            router,
            users,
            menu,
        }
    }

    /// App seeded with one admin and one ordinary user
    pub fn with_staff() -> Self {
        Self::with_users(
            InMemoryUserStore::new()
                .with_user(ADMIN_EMAIL, Some(Role::Admin))
                .with_user(GUEST_EMAIL, None),
        )
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}

pub const ADMIN_EMAIL: &str = "boss@letseat.test";
pub const GUEST_EMAIL: &str = "guest@letseat.test";

fn now() -> u64 {
    chrono::Utc::now().timestamp() as u64
}

/// Sign arbitrary claims with `secret`
pub fn sign_token(claims: &TokenClaims, secret: &str) -> Result<String> {
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// A valid one-hour token for `email`
pub fn create_test_jwt(email: &str) -> String {
    sign_token(&TokenClaims::new(email, now(), 3600), TEST_SECRET).unwrap()
}

/// A token that expired an hour ago
pub fn create_expired_jwt(email: &str) -> String {
    let claims = TokenClaims {
        email: email.to_string(),
        iat: now() - 7200,
        exp: now() - 3600,
    };
    sign_token(&claims, TEST_SECRET).unwrap()
}

/// A well-formed token signed with the wrong secret
pub fn create_foreign_jwt(email: &str) -> String {
    sign_token(&TokenClaims::new(email, now(), 3600), "not-the-server-secret").unwrap()
}

/// Build a request carrying `Authorization: Bearer <jwt>`
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    raw_request(method, uri, Some(&format!("Bearer {}", jwt)), body)
}

/// Build a request without an `Authorization` header
pub fn unauthed_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    raw_request(method, uri, None, body)
}

/// Build a request with a verbatim `Authorization` value
pub fn raw_request(
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }

    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
