//! Integration tests for the todo endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use todohub_auth::jwt::Claims;
use todohub_core::types::UserId;

#[tokio::test]
async fn test_todo_routes_require_token() {
    let app = helpers::TestApp::new();
    let id = uuid::Uuid::new_v4();

    for (method, path) in [
        ("GET", "/api/todos".to_string()),
        ("POST", "/api/todos".to_string()),
        ("PUT", format!("/api/todos/{id}")),
        ("DELETE", format!("/api/todos/{id}")),
    ] {
        let response = app
            .request(method, &path, Some(json!({ "text": "x" })), None)
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}

#[tokio::test]
async fn test_create_and_list() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/todos",
            Some(json!({ "text": "  buy milk  " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["text"], "buy milk");
    assert_eq!(response.body["completed"], false);
    assert!(response.body["_id"].is_string());
    assert!(response.body["timestamp"].is_string());
    assert!(response.body["userId"].is_string());

    let list = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 1);
    assert_eq!(list.body[0]["_id"], response.body["_id"]);
}

#[tokio::test]
async fn test_create_rejects_blank_text() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;

    for body in [json!({ "text": "   " }), json!({})] {
        let response = app
            .request("POST", "/api/todos", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;

    for text in ["one", "two", "three"] {
        app.create_todo(&token, text).await;
    }

    let list = app.request("GET", "/api/todos", None, Some(&token)).await;
    let texts: Vec<&str> = list
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["three", "two", "one"]);
}

#[tokio::test]
async fn test_toggle_twice_restores_state() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;
    let id = app.create_todo(&token, "flip me").await;
    let path = format!("/api/todos/{id}");

    let first = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["completed"], true);

    let second = app.request("PUT", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["completed"], false);
}

#[tokio::test]
async fn test_delete() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;
    let id = app.create_todo(&token, "remove me").await;
    let path = format!("/api/todos/{id}");

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Todo deleted");

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["message"], "Todo not found");

    let list = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert!(list.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;

    let missing = format!("/api/todos/{}", uuid::Uuid::new_v4());
    for (method, path) in [
        ("PUT", missing.as_str()),
        ("DELETE", missing.as_str()),
        ("PUT", "/api/todos/not-a-uuid"),
        ("DELETE", "/api/todos/12345"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {path}");
    }
}

#[tokio::test]
async fn test_users_cannot_touch_each_others_todos() {
    let app = helpers::TestApp::new();
    let ann = app.register("ann@example.com", "secret1").await;
    let bob = app.register("bob@example.com", "secret2").await;

    let id = app.create_todo(&ann, "ann's secret").await;
    let path = format!("/api/todos/{id}");

    let bobs_list = app.request("GET", "/api/todos", None, Some(&bob)).await;
    assert!(bobs_list.body.as_array().unwrap().is_empty());

    let toggle = app.request("PUT", &path, None, Some(&bob)).await;
    assert_eq!(toggle.status, StatusCode::NOT_FOUND);
    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);

    let anns_list = app.request("GET", "/api/todos", None, Some(&ann)).await;
    assert_eq!(anns_list.body.as_array().unwrap().len(), 1);
    assert_eq!(anns_list.body[0]["completed"], false);
}

fn sign(claims: &Claims, secret: &str) -> String {
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let an_hour_ago = Utc::now().timestamp() - 3600;
    let token = sign(
        &Claims {
            sub: UserId::new(),
            email: "ann@example.com".to_string(),
            iat: an_hour_ago - 60,
            exp: an_hour_ago,
        },
        helpers::TEST_SECRET,
    );

    let response = app.request("GET", "/api/todos", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_token_signed_with_another_secret_is_unauthorized() {
    let app = helpers::TestApp::new();
    let now = Utc::now().timestamp();
    let token = sign(
        &Claims {
            sub: UserId::new(),
            email: "ann@example.com".to_string(),
            iat: now,
            exp: now + 3600,
        },
        "not-the-server-secret",
    );

    for (method, body) in [("GET", None), ("POST", Some(json!({ "text": "x" })))] {
        let response = app.request(method, "/api/todos", body, Some(&token)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method}");
        assert_eq!(response.body["message"], "Invalid token signature");
    }
}
