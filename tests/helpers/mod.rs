//! Shared test helpers for HTTP-level tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_api::{AppState, build_app};
use roster_core::config::{AppConfig, StoreProvider};
use roster_database::Stores;

/// Test application backed by in-memory stores.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: Stores,
}

/// Status and parsed JSON body of a test response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed body, `Null` when empty or not JSON
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with empty stores
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.database.provider = StoreProvider::Memory;

        let stores = Stores::memory();
        let state = AppState::new(config, stores.clone());

        Self {
            router: build_app(state),
            stores,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("x-auth-token", token);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Register an account and return its access token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in register response")
            .to_string()
    }

    /// Create an employee and return the stored record
    pub async fn create_employee(&self, token: &str, body: Value) -> Value {
        let response = self
            .request("POST", "/api/employees", Some(body), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response.body["data"].clone()
    }
}

/// A valid employee body
pub fn employee_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "address": "1 Main Street",
        "experience": 3,
        "lastWorkCompany": "Acme",
        "dateOfResignation": "2023-12-31",
        "joiningDate": "2024-01-15"
    })
}

/// Field names listed in a validation error's details
pub fn violation_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
