//! Failure classification and error response shaping.
//!
//! Handlers and extractors fail with [`ApiError`], a thin wrapper around
//! [`AppError`](crm_core::AppError). Its `IntoResponse` impl only tags the
//! response; the [`error_hook`] middleware, which knows the request path,
//! classifies the failure and writes the final [`ErrorDetails`] body.

pub mod catalog;
pub mod classifier;
pub mod details;
pub mod hook;

pub use catalog::CatalogEntry;
pub use classifier::{ConstraintClassifier, ConstraintKind, MessageSniffingClassifier};
pub use details::ErrorDetails;
pub use hook::{ApiError, ApiResult, classify, error_hook, handle_panic};
