//! Customer CRUD, visits and Michelin status over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_customer_applies_defaults() {
    let app = TestApp::new();

    let created = app
        .create_customer("Ada Lovelace", "+44 20 7946 0000", "ada@example.com")
        .await;

    assert!(created["id"].as_i64().is_some());
    assert_eq!(created["name"], "Ada Lovelace");
    assert_eq!(created["visitCount"], 0);
    assert_eq!(created["michelinStatus"], "REGULAR");
    assert!(created["allergies"].is_null());
}

#[tokio::test]
async fn test_get_customer_round_trips() {
    let app = TestApp::new();
    let created = app
        .create_customer("Grace Hopper", "555-0101", "grace@example.com")
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request("GET", &format!("/api/customers/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, created);
}

#[tokio::test]
async fn test_list_and_search() {
    let app = TestApp::new();
    app.create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    app.create_customer("Alan Turing", "555-0002", "alan@example.com")
        .await;
    app.create_customer("Grace Hopper", "555-0003", "grace@navy.mil")
        .await;

    let all = app.request("GET", "/api/customers", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["totalItems"], 3);
    assert_eq!(all.body["page"], 1);
    assert_eq!(all.body["items"].as_array().unwrap().len(), 3);

    let found = app
        .request("GET", "/api/customers?q=TURING", None, None)
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["totalItems"], 1);
    assert_eq!(found.body["items"][0]["name"], "Alan Turing");

    let paged = app
        .request("GET", "/api/customers?page=2&pageSize=2", None, None)
        .await;
    assert_eq!(paged.status, StatusCode::OK);
    assert_eq!(paged.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(paged.body["totalPages"], 2);
    assert_eq!(paged.body["hasNext"], false);
    assert_eq!(paged.body["hasPrevious"], true);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let app = TestApp::new();
    app.create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;

    let response = app
        .request("GET", "/api/customers?page=18446744073709551615", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["totalItems"], 1);
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = TestApp::new();
    let created = app
        .create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{id}"),
            Some(json!({
                "name": "Ada King",
                "phone": "555-0009",
                "email": "ada.king@example.com",
                "allergies": "shellfish",
                "visitCount": 4,
                "michelinStatus": "SUSPICIOUS"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["name"], "Ada King");
    assert_eq!(response.body["allergies"], "shellfish");
    assert_eq!(response.body["visitCount"], 4);
    assert_eq!(response.body["michelinStatus"], "SUSPICIOUS");
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/customers/404",
            Some(json!({ "name": "Nobody", "phone": "555-0000", "email": "no@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Customer not found");
}

#[tokio::test]
async fn test_delete_customer() {
    let app = TestApp::new();
    let created = app
        .create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    let path = format!("/api/customers/{}", created["id"]);

    let deleted = app.request("DELETE", &path, None, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", &path, None, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let fetched = app.request("GET", &path, None, None).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_record_visits() {
    let app = TestApp::new();
    let created = app
        .create_customer("Ada Lovelace", "555-0001", "ada@example.com")
        .await;
    let path = format!("/api/customers/{}/visits", created["id"]);

    let once = app.request("POST", &path, Some(json!({})), None).await;
    assert_eq!(once.status, StatusCode::OK);
    assert_eq!(once.body["visitCount"], 1);

    let thrice = app
        .request("POST", &path, Some(json!({ "count": 3 })), None)
        .await;
    assert_eq!(thrice.body["visitCount"], 4);

    let zero = app
        .request("POST", &path, Some(json!({ "count": 0 })), None)
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
    assert_eq!(zero.body["exceptionType"], "InvalidArgumentFailure");
}

#[tokio::test]
async fn test_change_michelin_status() {
    let app = TestApp::new();
    let created = app
        .create_customer("Anton Ego", "555-0042", "ego@example.com")
        .await;
    let path = format!("/api/customers/{}/michelin-status", created["id"]);

    let suspicious = app
        .request("PUT", &path, Some(json!({ "michelinStatus": "SUSPICIOUS" })), None)
        .await;
    assert_eq!(suspicious.status, StatusCode::OK);
    assert_eq!(suspicious.body["michelinStatus"], "SUSPICIOUS");

    let inspector = app
        .request("PUT", &path, Some(json!({ "michelinStatus": "INSPECTOR" })), None)
        .await;
    assert_eq!(inspector.status, StatusCode::OK);
    assert_eq!(inspector.body["michelinStatus"], "INSPECTOR");

    let missing = app
        .request(
            "PUT",
            "/api/customers/999/michelin-status",
            Some(json!({ "michelinStatus": "REGULAR" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_update_may_set_any_status() {
    let app = TestApp::new();
    let created = app
        .create_customer("Anton Ego", "555-0042", "ego@example.com")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/customers/{}", created["id"]),
            Some(json!({
                "name": "Anton Ego",
                "phone": "555-0042",
                "email": "ego@example.com",
                "michelinStatus": "INSPECTOR"
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["michelinStatus"], "INSPECTOR");
}
