//! Menu and favorites integration tests

use axum::http::{Method, StatusCode};
use letseat_menu::MenuStore;
use serde_json::{json, Value};

use crate::common::{
    authed_request, create_test_jwt, unauthed_request, TestApp, ADMIN_EMAIL, GUEST_EMAIL,
};

fn dish(name: &str, category: &str, price: &str) -> Value {
    json!({
        "name": name,
        "recipe": "House recipe",
        "category": category,
        "price": price,
    })
}

async fn add_dish(app: &TestApp, name: &str, category: &str) -> String {
    let admin = create_test_jwt(ADMIN_EMAIL);
    let (status, body) = app
        .send(authed_request(
            Method::POST,
            "/menu",
            &admin,
            Some(dish(name, category, "12.00")),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_menu_is_public() {
    let app = TestApp::with_staff();
    let id = add_dish(&app, "Biryani", "rice").await;

    let (status, body) = app.send(unauthed_request(Method::GET, "/menu", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = app
        .send(unauthed_request(Method::GET, &format!("/menu/{}", id), None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Biryani");
}

#[tokio::test]
async fn test_menu_filters_by_category() {
    let app = TestApp::with_staff();
    add_dish(&app, "Biryani", "rice").await;
    add_dish(&app, "Pho", "soup").await;
    add_dish(&app, "Risotto", "rice").await;

    let (status, body) = app
        .send(unauthed_request(Method::GET, "/menu?category=rice", None))
        .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Biryani", "Risotto"]);
}

#[tokio::test]
async fn test_guest_cannot_add_dishes() {
    let app = TestApp::with_staff();
    let guest = create_test_jwt(GUEST_EMAIL);

    let (status, body) = app
        .send(authed_request(
            Method::POST,
            "/menu",
            &guest,
            Some(dish("Pho", "soup", "8.00")),
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "message": "forbidden access" }));

    let listed = app
        .menu
        .list_items(None, Default::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_gate_runs_before_body_validation() {
    let app = TestApp::with_staff();

    // Invalid payload without a token still answers 401
    let (status, _) = app
        .send(unauthed_request(
            Method::POST,
            "/menu",
            Some(dish("", "soup", "-1")),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let admin = create_test_jwt(ADMIN_EMAIL);
    let (status, _) = app
        .send(authed_request(
            Method::POST,
            "/menu",
            &admin,
            Some(dish("", "soup", "-1")),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_dish_drops_its_favorites() {
    let app = TestApp::with_staff();
    let id = add_dish(&app, "Biryani", "rice").await;
    let guest = create_test_jwt(GUEST_EMAIL);

    let (status, _) = app
        .send(authed_request(
            Method::POST,
            "/favorites",
            &guest,
            Some(json!({ "menu_item_id": id, "name": "Biryani", "price": "12.00" })),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let admin = create_test_jwt(ADMIN_EMAIL);
    let (status, _) = app
        .send(authed_request(
            Method::DELETE,
            &format!("/menu/{}", id),
            &admin,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app
        .send(authed_request(
            Method::GET,
            &format!("/favorites?email={}", GUEST_EMAIL),
            &guest,
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_favorites_are_scoped_to_token_owner() {
    let app = TestApp::with_staff();
    let id = add_dish(&app, "Pho", "soup").await;
    let guest = create_test_jwt(GUEST_EMAIL);

    // Owner comes from the token, not the payload
    let (status, created) = app
        .send(authed_request(
            Method::POST,
            "/favorites",
            &guest,
            Some(json!({
                "menu_item_id": id,
                "name": "Pho",
                "price": "8.00",
                "email": ADMIN_EMAIL,
            })),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], GUEST_EMAIL);

    assert!(app.menu.list_favorites(ADMIN_EMAIL).await.unwrap().is_empty());
    assert_eq!(app.menu.list_favorites(GUEST_EMAIL).await.unwrap().len(), 1);
}
