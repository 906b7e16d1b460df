//! Integration tests for the registration and login flow.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

use todohub_auth::jwt::JwtDecoder;
use todohub_core::config::AuthConfig;

fn decoder() -> JwtDecoder {
    JwtDecoder::new(&AuthConfig {
        jwt_secret: helpers::TEST_SECRET.to_string(),
        ..AuthConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ann@example.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["token"].is_string());
    assert_eq!(response.body["user"]["email"], "ann@example.com");
    assert!(response.body["user"]["id"].is_string());
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new();
    app.register("ann@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "Ann@Example.com", "password": "another1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "User already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = helpers::TestApp::new();

    for body in [
        json!({}),
        json!({ "email": "ann@example.com" }),
        json!({ "password": "secret1" }),
        json!({ "email": "", "password": "" }),
    ] {
        let response = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Please enter all fields");
    }
}

#[tokio::test]
async fn test_register_rejects_bad_email_and_short_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "not-an-email", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Please enter a valid email");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "ann@example.com", "password": "123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Password must be at least 6 characters long"
    );
}

#[tokio::test]
async fn test_login_token_identifies_user_for_seven_days() {
    let app = helpers::TestApp::new();
    app.register("ann@example.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let token = response.body["token"].as_str().unwrap();
    let claims = decoder().decode(token).unwrap();

    assert_eq!(claims.sub.to_string(), response.body["user"]["id"]);
    let seven_days = 7 * 24 * 3600;
    let remaining = claims.exp - Utc::now().timestamp();
    assert!(remaining <= seven_days && remaining > seven_days - 60);

    let expires_at: chrono::DateTime<Utc> =
        serde_json::from_value(response.body["expiresAt"].clone()).unwrap();
    assert_eq!(expires_at.timestamp(), claims.exp);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = helpers::TestApp::new();
    app.register("ann@example.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@example.com", "password": "wrong1" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "bob@example.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_password.body["message"], "Invalid Credentials");
    assert_eq!(unknown_email.status, wrong_password.status);
    assert_eq!(unknown_email.body, wrong_password.body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Please enter all fields");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/auth/login", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.register("ann@example.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], "ann@example.com");
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["uptime_seconds"].is_u64());
}
