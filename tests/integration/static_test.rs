//! Integration tests for serving the web client next to the API.

mod helpers;

use axum::http::StatusCode;
use tempfile::TempDir;

const INDEX: &str = "<!doctype html><title>TodoHub</title>";

fn app_with_client() -> (helpers::TestApp, TempDir) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('todohub');").unwrap();

    let static_dir = dir.path().to_string_lossy().into_owned();
    let app = helpers::TestApp::with_config(|config| {
        config.server.static_dir = Some(static_dir);
    });
    (app, dir)
}

#[tokio::test]
async fn test_unknown_api_path_is_json_not_found() {
    let (app, _dir) = app_with_client();

    for path in ["/api/nope", "/api/todos/abc/extra", "/api/auth"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(response.body["error"], "NOT_FOUND", "{path}");
        assert_eq!(response.body["message"], "Route not found", "{path}");
    }
}

#[tokio::test]
async fn test_unknown_api_path_without_client_is_json_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/nope", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Route not found");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let (app, _dir) = app_with_client();

    for path in ["/", "/login", "/todos/some-client-route"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path}");
        assert_eq!(response.text, INDEX, "{path}");
    }
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let (app, _dir) = app_with_client();

    let response = app.request("GET", "/app.js", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "console.log('todohub');");
}

#[tokio::test]
async fn test_api_routes_still_win_over_client() {
    let (app, _dir) = app_with_client();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["status"].is_string());
}
