//! Failure-to-response mapping as seen by clients.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_unknown_customer_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/customers/999999", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(response.error_message(), "Customer not found");
    assert_eq!(response.body["path"], "/api/customers/999999");
    assert_eq!(response.body["exceptionType"], "NotFoundFailure");
    assert!(response.body.get("validationErrors").is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({ "name": "Imposter", "phone": "555-0002", "email": "ada@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "Conflict");
    assert_eq!(response.error_message(), "Email already exists");
}

#[tokio::test]
async fn test_duplicate_phone_is_conflict() {
    let app = TestApp::new();
    app.create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({ "name": "Imposter", "phone": "555-0001", "email": "other@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_message(), "Phone number already exists");
}

#[tokio::test]
async fn test_update_onto_taken_email_is_conflict() {
    let app = TestApp::new();
    app.create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    let grace = app
        .create_customer("Grace Hopper", "555-0002", "grace@example.com")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{}", grace["id"]),
            Some(json!({ "name": "Grace Hopper", "phone": "555-0002", "email": "ada@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_message(), "Email already exists");
}

#[tokio::test]
async fn test_validation_failure_lists_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({
                "name": "",
                "phone": "555-0001",
                "email": "ada@example.com",
                "notes": "x".repeat(1001)
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
    assert_eq!(response.error_message(), "Validation failed");

    let errors = response.body["validationErrors"]
        .as_object()
        .expect("validationErrors missing");
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("notes"));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["name"], "Name is required");
}

#[tokio::test]
async fn test_invalid_email_is_reported_once() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({ "name": "Ada", "phone": "555-0001", "email": "not-an-email" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["validationErrors"],
        json!({ "email": "Invalid email address" })
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let req = Request::builder()
        .method("POST")
        .uri("/api/customers")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["exceptionType"], "InvalidArgumentFailure");
    assert!(response.body.get("validationErrors").is_none());
}

#[tokio::test]
async fn test_unknown_status_value_is_bad_request() {
    let app = TestApp::new();
    let created = app
        .create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{}/michelin-status", created["id"]),
            Some(json!({ "michelinStatus": "CRITIC" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/customers/abc", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["exceptionType"], "InvalidArgumentFailure");
    assert_eq!(response.body["path"], "/api/customers/abc");
}

#[tokio::test]
async fn test_unknown_route_has_error_body() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/nothing", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not Found");
    assert_eq!(response.error_message(), "No route for GET /api/nothing");
    assert_eq!(response.body["path"], "/api/nothing");
    assert_eq!(response.body["exceptionType"], "NoRouteFailure");
}

#[tokio::test]
async fn test_unsupported_method_has_error_body() {
    let app = TestApp::new();
    let created = app
        .create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    let path = format!("/api/customers/{}", created["id"]);

    let response = app
        .request("PATCH", &path, Some(json!({ "name": "Ada" })), None)
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"], "Method Not Allowed");
    assert_eq!(response.body["path"], path.as_str());
    assert_eq!(response.body["exceptionType"], "MethodNotAllowedFailure");
    assert!(response.error_message().contains("PATCH"));
}

#[tokio::test]
async fn test_null_required_field_is_a_validation_failure() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/customers",
            Some(json!({ "name": null, "phone": "555-0001", "email": "ada@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Validation failed");
    assert_eq!(
        response.body["validationErrors"],
        json!({ "name": "Name is required" })
    );
    assert_eq!(response.body["exceptionType"], "ValidationFailure");
}
