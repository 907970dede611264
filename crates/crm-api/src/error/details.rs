//! The uniform JSON error body.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crm_core::error::{AppError, FieldViolation};

use super::catalog::CatalogEntry;

/// Message used for every request-validation failure.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Snapshot of one failed request, returned as the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    /// Local time the failure was handled, without zone.
    pub timestamp: NaiveDateTime,
    /// Numeric HTTP status.
    pub status: u16,
    /// Standard reason phrase for `status`.
    pub error: String,
    /// Human-readable description.
    pub message: String,
    /// Request path that failed.
    pub path: String,
    /// Failure kind name, e.g. `NotFoundFailure`.
    pub exception_type: String,
    /// Field (or rule) to message; only present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ErrorDetails {
    fn build(status: StatusCode, message: String, failure: &AppError, path: &str) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message,
            path: path.to_string(),
            exception_type: failure.kind.type_name().to_string(),
            validation_errors: None,
        }
    }

    /// Body with the catalogued status and message for `entry`.
    pub fn from_catalog(entry: CatalogEntry, failure: &AppError, path: &str) -> Self {
        Self::build(entry.status(), entry.message().to_string(), failure, path)
    }

    /// Body with an explicit status carrying the failure's own message.
    pub fn from_status(status: StatusCode, failure: &AppError, path: &str) -> Self {
        Self::build(status, failure.message.clone(), failure, path)
    }

    /// 400 body listing every violation.
    ///
    /// Each violation is keyed by its field, or by the rule identifier when
    /// it spans the whole object. If one key fails several rules, the first
    /// reported message is kept.
    pub fn validation(failure: &AppError, violations: &[FieldViolation], path: &str) -> Self {
        let mut map = BTreeMap::new();
        for violation in violations {
            map.entry(violation.key().to_string())
                .or_insert_with(|| violation.message.clone());
        }

        Self {
            validation_errors: Some(map),
            ..Self::build(
                StatusCode::BAD_REQUEST,
                VALIDATION_FAILED.to_string(),
                failure,
                path,
            )
        }
    }

    /// The status as a [`StatusCode`].
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
