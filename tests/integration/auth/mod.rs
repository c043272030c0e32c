//! Access gate integration tests
//!
//! Token verification, admin authorization and their ordering, exercised
//! through the composed application.

use axum::http::{Method, StatusCode};
use letseat_auth::Role;
use letseat_users::mock::InMemoryUserStore;
use serde_json::json;

use crate::common::{
    authed_request, create_expired_jwt, create_foreign_jwt, create_test_jwt, raw_request,
    unauthed_request, TestApp, ADMIN_EMAIL, GUEST_EMAIL,
};

/// Routes behind token verification only
const TOKEN_ROUTES: &[(&str, &str)] = &[
    ("GET", "/users/admin/a@x.com"),
    ("GET", "/favorites?email=a@x.com"),
];

/// Routes behind token verification and admin authorization
const ADMIN_ROUTES: &[(&str, &str)] = &[
    ("GET", "/users"),
    ("PATCH", "/users/admin/a@x.com"),
    ("DELETE", "/users/a@x.com"),
    ("DELETE", "/menu/00000000-0000-0000-0000-000000000000"),
];

fn method(name: &str) -> Method {
    name.parse().unwrap()
}

mod test_token_verification {
    use super::*;

    #[tokio::test]
    async fn test_token_issued_by_server_reaches_handler_with_claim() {
        let app = TestApp::new();

        let (status, body) = app
            .send(unauthed_request(
                Method::POST,
                "/jwt",
                Some(json!({ "email": "a@x.com" })),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap().to_string();

        // Self-scoped route: handler only answers when the claim is a@x.com
        let (status, body) = app
            .send(authed_request(
                Method::GET,
                "/users/admin/a@x.com",
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "admin": false }));
    }

    #[tokio::test]
    async fn test_missing_header_is_401_everywhere_without_lookup() {
        let app = TestApp::with_staff();

        for (verb, uri) in TOKEN_ROUTES.iter().chain(ADMIN_ROUTES) {
            let (status, body) = app.send(unauthed_request(method(verb), uri, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", verb, uri);
            assert_eq!(body, json!({ "message": "unauthorized access" }));
        }

        assert_eq!(app.users.directory_lookups(), 0);
    }

    #[tokio::test]
    async fn test_garbage_token_is_401_without_lookup() {
        let app = TestApp::with_staff();

        for (verb, uri) in TOKEN_ROUTES.iter().chain(ADMIN_ROUTES) {
            let (status, body) = app
                .send(raw_request(method(verb), uri, Some("Bearer garbage"), None))
                .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", verb, uri);
            assert_eq!(body, json!({ "message": "unauthorized access" }));
        }

        assert_eq!(app.users.directory_lookups(), 0);
    }

    #[tokio::test]
    async fn test_foreign_secret_is_401() {
        let app = TestApp::with_staff();
        let token = create_foreign_jwt(ADMIN_EMAIL);

        let (status, _) = app
            .send(authed_request(Method::GET, "/users", &token, None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.users.directory_lookups(), 0);
    }

    #[tokio::test]
    async fn test_expired_token_is_401() {
        let app = TestApp::with_staff();
        let token = create_expired_jwt(ADMIN_EMAIL);

        let (status, body) = app
            .send(authed_request(Method::GET, "/users", &token, None))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "unauthorized access" }));
    }

    #[tokio::test]
    async fn test_scheme_is_not_interpreted() {
        let app = TestApp::new();
        let token = create_test_jwt("a@x.com");

        let (status, _) = app
            .send(raw_request(
                Method::GET,
                "/users/admin/a@x.com",
                Some(&format!("Token {}", token)),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        // No space, no token segment
        let (status, _) = app
            .send(raw_request(
                Method::GET,
                "/users/admin/a@x.com",
                Some(&token),
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod test_role_authorization {
    use super::*;

    #[tokio::test]
    async fn test_admin_reaches_every_admin_route() {
        let app = TestApp::with_staff();
        let token = create_test_jwt(ADMIN_EMAIL);

        for (verb, uri) in ADMIN_ROUTES {
            let (status, _) = app.send(authed_request(method(verb), uri, &token, None)).await;
            assert_ne!(status, StatusCode::UNAUTHORIZED, "{} {}", verb, uri);
            assert_ne!(status, StatusCode::FORBIDDEN, "{} {}", verb, uri);
        }

        // One lookup per admin-gated request
        assert_eq!(app.users.directory_lookups(), ADMIN_ROUTES.len());
    }

    #[tokio::test]
    async fn test_user_without_role_is_403() {
        let app = TestApp::with_staff();
        let token = create_test_jwt(GUEST_EMAIL);

        for (verb, uri) in ADMIN_ROUTES {
            let (status, body) = app.send(authed_request(method(verb), uri, &token, None)).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{} {}", verb, uri);
            assert_eq!(body, json!({ "message": "forbidden access" }));
        }
    }

    #[tokio::test]
    async fn test_unknown_user_is_403() {
        let app = TestApp::new();
        let token = create_test_jwt("a@x.com");

        let (status, body) = app
            .send(authed_request(Method::GET, "/users", &token, None))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "message": "forbidden access" }));
        assert_eq!(app.users.directory_lookups(), 1);
    }

    #[tokio::test]
    async fn test_role_is_read_per_request() {
        let users = InMemoryUserStore::new()
            .with_user(ADMIN_EMAIL, Some(Role::Admin))
            .with_user(GUEST_EMAIL, None);
        let app = TestApp::with_users(users);

        let guest = create_test_jwt(GUEST_EMAIL);
        let (status, _) = app
            .send(authed_request(Method::GET, "/users", &guest, None))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let admin = create_test_jwt(ADMIN_EMAIL);
        let (status, _) = app
            .send(authed_request(
                Method::PATCH,
                &format!("/users/admin/{}", GUEST_EMAIL),
                &admin,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        // Same token as before, promotion now visible
        let (status, _) = app
            .send(authed_request(Method::GET, "/users", &guest, None))
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}

mod test_self_match {
    use super::*;

    #[tokio::test]
    async fn test_other_users_admin_status_is_forbidden() {
        let app = TestApp::with_staff();
        let token = create_test_jwt(GUEST_EMAIL);

        let (status, body) = app
            .send(authed_request(
                Method::GET,
                &format!("/users/admin/{}", ADMIN_EMAIL),
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "message": "forbidden access" }));
    }

    #[tokio::test]
    async fn test_admin_cannot_read_someone_elses_favorites_either() {
        let app = TestApp::with_staff();
        let token = create_test_jwt(ADMIN_EMAIL);

        let (status, _) = app
            .send(authed_request(
                Method::GET,
                &format!("/favorites?email={}", GUEST_EMAIL),
                &token,
                None,
            ))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
