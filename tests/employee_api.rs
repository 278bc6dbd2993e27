//! HTTP tests for employee records and their history.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, employee_body, violation_fields};

async fn app_with_token() -> (TestApp, String) {
    let app = TestApp::new();
    let token = app.register("admin@x.com", "secret1").await;
    (app, token)
}

#[tokio::test]
async fn test_update_scenario_builds_history() {
    let (app, token) = app_with_token().await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    let user_id = me.body["data"]["id"].clone();

    let created = app
        .create_employee(&token, employee_body("Alice", "a@x.com"))
        .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["history"], json!([]));
    let path = format!("/api/employees/{}", id);

    let first = app
        .request(
            "PUT",
            &path,
            Some(employee_body("Alicia", "a@x.com")),
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["name"], "Alicia");
    assert_eq!(first.body["data"]["history"][0]["data"]["name"], "Alice");
    assert_eq!(first.body["data"]["history"][0]["changedBy"], user_id);

    let second = app
        .request("PUT", &path, Some(employee_body("Ali", "a@x.com")), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::OK);

    let history = app
        .request("GET", &format!("{}/history", path), None, Some(&token))
        .await;
    assert_eq!(history.status, StatusCode::OK);
    let entries = history.body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["data"]["name"], "Alice");
    assert_eq!(entries[1]["data"]["name"], "Alicia");

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.body["data"]["name"], "Ali");
    assert_eq!(fetched.body["data"]["createdAt"], created["createdAt"]);

    let deleted = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["message"], "Employee removed");

    let gone = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_identical_update_still_appends_history() {
    let (app, token) = app_with_token().await;
    let created = app
        .create_employee(&token, employee_body("Alice", "a@x.com"))
        .await;
    let path = format!("/api/employees/{}", created["id"].as_str().unwrap());

    for _ in 0..2 {
        let response = app
            .request("PUT", &path, Some(employee_body("Alice", "a@x.com")), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.body["data"]["history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_employee_routes_require_token() {
    let app = TestApp::new();

    let list = app.request("GET", "/api/employees", None, None).await;
    let create = app
        .request(
            "POST",
            "/api/employees",
            Some(employee_body("Alice", "a@x.com")),
            None,
        )
        .await;

    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
    assert_eq!(list.body["message"], "No token, authorization denied");
}

#[tokio::test]
async fn test_create_reports_every_violation() {
    let (app, token) = app_with_token().await;
    let mut body = employee_body("Alice", "not-an-email");
    body["experience"] = json!(51);
    body.as_object_mut().unwrap().remove("address");

    let response = app
        .request("POST", "/api/employees", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(
        violation_fields(&response.body),
        vec!["email", "address", "experience"]
    );
}

#[tokio::test]
async fn test_experience_boundaries() {
    let (app, token) = app_with_token().await;

    for (i, years) in [0, 50].into_iter().enumerate() {
        let mut body = employee_body("Edge", &format!("edge{}@x.com", i));
        body["experience"] = json!(years);
        let response = app
            .request("POST", "/api/employees", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{years}");
    }

    for years in [-1, 51] {
        let mut body = employee_body("Edge", "bad@x.com");
        body["experience"] = json!(years);
        let response = app
            .request("POST", "/api/employees", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{years}");
    }
}

#[tokio::test]
async fn test_invalid_update_leaves_record_untouched() {
    let (app, token) = app_with_token().await;
    let created = app
        .create_employee(&token, employee_body("Alice", "a@x.com"))
        .await;
    let path = format!("/api/employees/{}", created["id"].as_str().unwrap());

    let mut body = employee_body("Alicia", "a@x.com");
    body["joiningDate"] = json!("2024-02-30");
    let response = app.request("PUT", &path, Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(violation_fields(&response.body), vec!["joiningDate"]);

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.body["data"]["name"], "Alice");
    assert_eq!(fetched.body["data"]["history"], json!([]));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let (app, token) = app_with_token().await;
    app.create_employee(&token, employee_body("Alice", "a@x.com"))
        .await;
    let bob = app
        .create_employee(&token, employee_body("Bob", "b@x.com"))
        .await;

    let create = app
        .request(
            "POST",
            "/api/employees",
            Some(employee_body("Alias", "A@X.com")),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::CONFLICT);

    let bob_path = format!("/api/employees/{}", bob["id"].as_str().unwrap());
    let update = app
        .request(
            "PUT",
            &bob_path,
            Some(employee_body("Bob", "a@x.com")),
            Some(&token),
        )
        .await;
    assert_eq!(update.status, StatusCode::CONFLICT);

    let fetched = app.request("GET", &bob_path, None, Some(&token)).await;
    assert_eq!(fetched.body["data"]["email"], "b@x.com");
    assert_eq!(fetched.body["data"]["history"], json!([]));
}

#[tokio::test]
async fn test_missing_and_malformed_ids_are_not_found() {
    let (app, token) = app_with_token().await;
    let missing = format!("/api/employees/{}", uuid::Uuid::new_v4());

    for path in [missing.as_str(), "/api/employees/not-an-id"] {
        let get = app.request("GET", path, None, Some(&token)).await;
        let put = app
            .request("PUT", path, Some(employee_body("Ghost", "g@x.com")), Some(&token))
            .await;
        let delete = app.request("DELETE", path, None, Some(&token)).await;

        assert_eq!(get.status, StatusCode::NOT_FOUND, "GET {path}");
        assert_eq!(put.status, StatusCode::NOT_FOUND, "PUT {path}");
        assert_eq!(delete.status, StatusCode::NOT_FOUND, "DELETE {path}");
    }

    let list = app.request("GET", "/api/employees", None, Some(&token)).await;
    assert_eq!(list.body["data"], json!([]));
}

#[tokio::test]
async fn test_list_is_ordered_by_joining_date_without_history() {
    let (app, token) = app_with_token().await;

    let mut older = employee_body("Older", "old@x.com");
    older["joiningDate"] = json!("2020-03-01");
    let older = app.create_employee(&token, older).await;

    let mut newer = employee_body("Newer", "new@x.com");
    newer["joiningDate"] = json!("2024-06-01");
    app.create_employee(&token, newer).await;

    let path = format!("/api/employees/{}", older["id"].as_str().unwrap());
    app.request("PUT", &path, Some(employee_body("Older", "old@x.com")), Some(&token))
        .await;

    let list = app.request("GET", "/api/employees", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Newer");
    assert_eq!(items[1]["historyCount"], 1);
    assert!(items.iter().all(|item| item.get("history").is_none()));
}

#[tokio::test]
async fn test_wrong_typed_field_does_not_hide_other_violations() {
    let (app, token) = app_with_token().await;
    let mut body = employee_body("", "bad");
    body["experience"] = json!("abc");

    let response = app
        .request("POST", "/api/employees", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        violation_fields(&response.body),
        vec!["name", "email", "experience"]
    );
    assert_eq!(response.body["details"][2]["code"], "type");
}

#[tokio::test]
async fn test_experience_may_be_a_numeric_string() {
    let (app, token) = app_with_token().await;
    let mut body = employee_body("Alice", "a@x.com");
    body["experience"] = json!("5");

    let created = app.create_employee(&token, body).await;
    assert_eq!(created["experience"], 5.0);

    let path = format!("/api/employees/{}", created["id"].as_str().unwrap());
    let mut update = employee_body("Alice", "a@x.com");
    update["experience"] = json!("7.5");
    let response = app.request("PUT", &path, Some(update), Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["experience"], 7.5);
}
