//! The error hook: one place where failures become responses.

use std::any::Any;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use crm_core::error::{AppError, ErrorKind};

use super::catalog::CatalogEntry;
use super::classifier::{ConstraintClassifier, ConstraintKind};
use super::details::ErrorDetails;
use crate::state::AppState;

/// HTTP-facing wrapper for [`AppError`].
///
/// Handlers return `Result<_, ApiError>` and use `?` on anything yielding an
/// `AppError`. The wrapper also rides in the response extensions so the
/// [`error_hook`] can find the failure that produced a response.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

/// Result alias for handlers and extractors.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Provisional status for a failure, used until the hook renders it.
fn provisional_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::ConstraintViolation | ErrorKind::InvalidState => StatusCode::CONFLICT,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::NoRoute => StatusCode::NOT_FOUND,
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = provisional_status(self.0.kind).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Classify a failure into the body returned to the client.
///
/// Ordered and total: every [`ErrorKind`] maps to exactly one branch.
pub fn classify(
    failure: &AppError,
    path: &str,
    classifier: &dyn ConstraintClassifier,
) -> ErrorDetails {
    let details = match failure.kind {
        ErrorKind::Validation => ErrorDetails::validation(failure, &failure.violations, path),
        ErrorKind::NotFound => {
            ErrorDetails::from_catalog(CatalogEntry::CustomerNotFound, failure, path)
        }
        ErrorKind::ConstraintViolation => match classifier.classify(&failure.message) {
            ConstraintKind::DuplicateEmail => {
                ErrorDetails::from_catalog(CatalogEntry::DuplicateEmail, failure, path)
            }
            ConstraintKind::DuplicatePhone => {
                ErrorDetails::from_catalog(CatalogEntry::DuplicatePhone, failure, path)
            }
            ConstraintKind::Other => ErrorDetails::from_status(StatusCode::CONFLICT, failure, path),
        },
        ErrorKind::InvalidArgument => {
            ErrorDetails::from_status(StatusCode::BAD_REQUEST, failure, path)
        }
        ErrorKind::InvalidState => ErrorDetails::from_status(StatusCode::CONFLICT, failure, path),
        ErrorKind::Authentication => {
            ErrorDetails::from_status(StatusCode::UNAUTHORIZED, failure, path)
        }
        ErrorKind::NoRoute => ErrorDetails::from_status(StatusCode::NOT_FOUND, failure, path),
        ErrorKind::MethodNotAllowed => {
            ErrorDetails::from_status(StatusCode::METHOD_NOT_ALLOWED, failure, path)
        }
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => {
            error!(
                path = %path,
                kind = %failure.kind,
                error = %failure.message,
                source = ?failure.source,
                "Unhandled failure"
            );
            return ErrorDetails::from_catalog(CatalogEntry::InternalServerError, failure, path);
        }
    };

    debug!(
        path = %path,
        status = details.status,
        kind = %failure.kind,
        message = %failure.message,
        "Request failed"
    );
    details
}

/// Render a response tagged with an [`ApiError`] into [`ErrorDetails`].
///
/// Headers set further in (such as `WWW-Authenticate`) are preserved.
pub async fn error_hook(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    let Some(ApiError(failure)) = response.extensions_mut().remove::<ApiError>() else {
        return response;
    };

    let details = classify(&failure, &path, state.classifier.as_ref());
    let mut rendered = (details.status_code(), Json(details)).into_response();

    for (name, value) in response.headers() {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            rendered.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rendered
}

/// Turn a handler panic into an internal failure for the hook to render.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    ApiError::from(AppError::internal(format!("Handler panicked: {detail}"))).into_response()
}
