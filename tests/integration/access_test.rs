//! Access policy applied before any handler runs.

use axum::body::Body;
use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{Request, StatusCode};

use crate::helpers::{PASSWORD, TestApp, USERNAME, basic_header};

const AUTHENTICATION_REQUIRED: &str = "Full authentication is required to access this resource";

#[tokio::test]
async fn test_open_paths_need_no_credentials() {
    let app = TestApp::secured();

    for path in ["/actuator/health", "/actuator/info", "/v3/api-docs", "/db-console"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "{path} should be open");
    }
}

#[tokio::test]
async fn test_swagger_ui_is_open() {
    let app = TestApp::secured();

    let response = app.request("GET", "/swagger-ui.html", None, None).await;
    assert!(response.status.is_redirection());

    let response = app.request("GET", "/swagger-ui/", None, None).await;
    assert_ne!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_credentials_are_challenged() {
    let app = TestApp::secured();

    let response = app.request("GET", "/api/customers", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
    assert_eq!(response.error_message(), AUTHENTICATION_REQUIRED);
    assert_eq!(response.body["exceptionType"], "AuthenticationFailure");

    let challenge = response
        .headers
        .get(WWW_AUTHENTICATE)
        .and_then(|v| v.to_str().ok())
        .expect("WWW-Authenticate missing");
    assert_eq!(challenge, "Basic realm=\"restaurant-crm\"");
}

#[tokio::test]
async fn test_unknown_path_is_guarded() {
    let app = TestApp::secured();

    let response = app.request("GET", "/internal/anything", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let authenticated = app
        .request("GET", "/internal/anything", None, Some((USERNAME, PASSWORD)))
        .await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
    assert_eq!(authenticated.body["exceptionType"], "NoRouteFailure");
}

#[tokio::test]
async fn test_bearer_token_is_not_accepted() {
    let app = TestApp::secured();

    let req = Request::builder()
        .uri("/api/customers")
        .header("Authorization", "Bearer abc.def.ghi")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), AUTHENTICATION_REQUIRED);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::secured();

    let response = app
        .request("GET", "/api/customers", None, Some((USERNAME, "guess")))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Bad credentials");
    assert!(response.headers.contains_key(WWW_AUTHENTICATE));
}

#[tokio::test]
async fn test_garbled_header_is_rejected() {
    let app = TestApp::secured();

    let req = Request::builder()
        .uri("/api/customers")
        .header("Authorization", "Basic %%%not-base64%%%")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_message(), "Bad credentials");
}

#[tokio::test]
async fn test_valid_credentials_reach_handlers() {
    let app = TestApp::secured();

    let listed = app
        .request("GET", "/api/customers", None, Some((USERNAME, PASSWORD)))
        .await;
    assert_eq!(listed.status, StatusCode::OK);

    let missing = app
        .request("GET", "/api/customers/7", None, Some((USERNAME, PASSWORD)))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_message(), "Customer not found");
}

#[tokio::test]
async fn test_permit_all_opens_everything() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/customers", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let console = app.request("GET", "/db-console", None, None).await;
    assert_eq!(console.body["permitAll"], true);
}

#[test]
fn test_basic_header_encoding() {
    assert_eq!(basic_header("admin", "admin"), "Basic YWRtaW46YWRtaW4=");
}
