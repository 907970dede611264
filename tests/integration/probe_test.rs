//! Health, info, API docs and the development console.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_store() {
    let app = TestApp::new();

    let response = app.request("GET", "/actuator/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "UP");
    assert_eq!(response.body["components"]["db"]["status"], "UP");
}

#[tokio::test]
async fn test_info_names_the_application() {
    let app = TestApp::new();

    let response = app.request("GET", "/actuator/info", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["app"]["name"], "restaurant-crm");
    assert!(response.body["app"]["version"].is_string());
}

#[tokio::test]
async fn test_api_docs_describe_customer_routes() {
    let app = TestApp::new();

    let response = app.request("GET", "/v3/api-docs", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let paths = response.body["paths"].as_object().expect("paths missing");
    assert!(paths.contains_key("/api/customers"));
    assert!(paths.contains_key("/api/customers/{id}/michelin-status"));
    assert!(
        response.body["components"]["securitySchemes"]
            .get("basic_auth")
            .is_some()
    );
}

#[tokio::test]
async fn test_console_summarizes_store() {
    let app = TestApp::secured();
    assert!(app.config.server.dev_console);

    let response = app.request("GET", "/db-console/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["provider"], "memory");
    assert_eq!(response.body["customerCount"], 0);
    assert_eq!(response.body["permitAll"], false);
}
