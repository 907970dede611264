//! Access gate: applies the [`AccessPolicy`](crm_auth::AccessPolicy) before routing.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crm_auth::{BasicAuthError, BasicCredentials, Requirement};
use crm_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Message when no usable credentials were sent.
pub const AUTHENTICATION_REQUIRED: &str =
    "Full authentication is required to access this resource";
/// Message when credentials were sent but did not match.
pub const BAD_CREDENTIALS: &str = "Bad credentials";

/// 401 carrying a Basic challenge for `realm`.
fn challenge(realm: &str, message: &str) -> Response {
    let mut response = ApiError::from(AppError::authentication(message)).into_response();
    let value = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
    response.headers_mut().insert(WWW_AUTHENTICATE, value);
    response
}

/// Let the request through if the policy permits it or it carries the
/// provisioned account's credentials; otherwise answer 401.
pub async fn access_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if state.policy.requirement_for(path) == Requirement::PermitAll {
        return next.run(request).await;
    }

    let realm = &state.config.security.realm;
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let creds = match BasicCredentials::from_header(header) {
        Ok(creds) => creds,
        Err(BasicAuthError::MissingHeader | BasicAuthError::NotBasicAuth) => {
            debug!(path = %path, "No Basic credentials");
            return challenge(realm, AUTHENTICATION_REQUIRED);
        }
        Err(err) => {
            debug!(path = %path, error = %err, "Malformed Basic credentials");
            return challenge(realm, BAD_CREDENTIALS);
        }
    };

    let credential = Arc::clone(&state.credential);
    let username = creds.username.clone();
    let verified = tokio::task::spawn_blocking(move || {
        credential.verify(&creds.username, &creds.password)
    })
    .await
    .map_err(|e| AppError::internal(format!("Credential check aborted: {e}")))
    .and_then(|result| result);

    match verified {
        Ok(true) => {
            debug!(path = %request.uri().path(), username = %username, "Authenticated");
            next.run(request).await
        }
        Ok(false) => {
            warn!(path = %request.uri().path(), username = %username, "Rejected Basic credentials");
            challenge(realm, BAD_CREDENTIALS)
        }
        Err(err) => ApiError::from(err).into_response(),
    }
}
