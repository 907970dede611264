//! Answers for requests no route accepts.

use axum::http::{Method, Uri};

use crm_core::error::AppError;

use crate::error::ApiError;

/// No route matches the path.
pub async fn no_route(method: Method, uri: Uri) -> ApiError {
    AppError::no_route(format!("No route for {method} {}", uri.path())).into()
}

/// The path is routed, but not for this method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    AppError::method_not_allowed(format!("Method {method} is not supported for {}", uri.path()))
        .into()
}
