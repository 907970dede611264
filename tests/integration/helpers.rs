//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use tower::ServiceExt;

use crm_api::AppState;
use crm_core::config::{AppConfig, DatabaseProvider, SecurityMode};
use crm_database::InMemoryCustomerRepository;

/// Account provisioned for every test app.
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "admin";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// App with every path open, as the test profile runs it.
    pub fn new() -> Self {
        Self::with_mode(SecurityMode::PermitAll)
    }

    /// App guarded by the standard access rules.
    pub fn secured() -> Self {
        Self::with_mode(SecurityMode::Standard)
    }

    fn with_mode(mode: SecurityMode) -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.server.dev_console = true;
        config.security.mode = mode;
        config.security.username = USERNAME.to_string();
        config.security.password = PASSWORD.to_string();

        let store = Arc::new(InMemoryCustomerRepository::new());
        let state = AppState::new(config.clone(), store).expect("Failed to build app state");
        let router = crm_api::build_app(state);

        Self { router, config }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth: Option<(&str, &str)>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some((user, pass)) = auth {
            req = req.header("Authorization", basic_header(user, pass));
        }

        let req = match body {
            Some(b) => req
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&b).expect("Failed to serialize body"),
                )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request, for raw headers or malformed bodies.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Register a customer and return the created record.
    pub async fn create_customer(&self, name: &str, phone: &str, email: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/customers",
                Some(json!({ "name": name, "phone": phone, "email": email })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body
    }
}

/// `Authorization` value for HTTP Basic.
pub fn basic_header(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Assert the standard error body shape and return its message.
    pub fn error_message(&self) -> &str {
        assert_eq!(self.body["status"], self.status.as_u16());
        assert!(self.body["timestamp"].is_string());
        assert!(self.body["error"].is_string());
        assert!(self.body["exceptionType"].is_string());
        assert!(self.body["path"].is_string());
        self.body["message"].as_str().expect("message missing")
    }
}
