//! HTTP tests for registration, login, and token handling.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use helpers::{TestApp, violation_fields};

#[tokio::test]
async fn test_register_returns_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "admin@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert!(response.body["data"]["token"].is_string());
    assert!(response.body["data"]["expiresAt"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let app = TestApp::new();
    app.register("admin@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "Admin@X.com", "password": "another1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_reports_invalid_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "not-an-email", "password": "123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(violation_fields(&response.body), vec!["email", "password"]);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.register("admin@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "admin@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let app = TestApp::new();
    app.register("admin@x.com", "secret1").await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "admin@x.com", "password": "wrong-pass" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body["message"], unknown.body["message"]);
}

#[tokio::test]
async fn test_me_with_token_header() {
    let app = TestApp::new();
    let token = app.register("admin@x.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "admin@x.com");
    assert!(response.body["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_me_with_bearer_header() {
    let app = TestApp::new();
    let token = app.register("admin@x.com", "secret1").await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_without_token_is_unauthenticated() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthenticated() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_body_is_validation_error() {
    let app = TestApp::new();

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"][0]["field"], "body");
    assert_eq!(response.body["details"][0]["code"], "syntax");
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "memory");
    assert_eq!(response.body["data"]["storeHealthy"], true);
}
