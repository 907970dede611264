//! Unified application error types for the CRM.
//!
//! Every layer maps its internal errors into [`AppError`] and propagates them
//! with `?`. Nothing below the HTTP boundary formats a response: the API
//! crate's error hook is the single place where an [`ErrorKind`] becomes a
//! status code and a JSON body.

use std::fmt;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Key the validator uses for struct-level (schema) rule failures.
const STRUCT_LEVEL_KEY: &str = "__all__";

/// Closed set of failure categories raised by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// One or more submitted field values violate a declared constraint.
    Validation,
    /// A lookup by identifier found nothing.
    NotFound,
    /// The storage layer rejected a write (uniqueness, integrity).
    ConstraintViolation,
    /// The caller supplied an argument the operation cannot accept.
    InvalidArgument,
    /// The operation is not allowed in the record's current state.
    InvalidState,
    /// The request carried no credentials or the wrong ones.
    Authentication,
    /// No route matches the request path.
    NoRoute,
    /// The path exists but does not accept the request method.
    MethodNotAllowed,
    /// An internal server error occurred.
    Internal,
    /// A database error other than a constraint violation occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl ErrorKind {
    /// Simple failure-kind name reported to clients as `exceptionType`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Validation => "ValidationFailure",
            Self::NotFound => "NotFoundFailure",
            Self::ConstraintViolation => "ConstraintViolationFailure",
            Self::InvalidArgument => "InvalidArgumentFailure",
            Self::InvalidState => "InvalidStateFailure",
            Self::Authentication => "AuthenticationFailure",
            Self::NoRoute => "NoRouteFailure",
            Self::MethodNotAllowed => "MethodNotAllowedFailure",
            Self::Internal => "InternalFailure",
            Self::Database => "DatabaseFailure",
            Self::Configuration => "ConfigurationFailure",
            Self::Serialization => "SerializationFailure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::ConstraintViolation => write!(f, "CONSTRAINT_VIOLATION"),
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            Self::InvalidState => write!(f, "INVALID_STATE"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::NoRoute => write!(f, "NO_ROUTE"),
            Self::MethodNotAllowed => write!(f, "METHOD_NOT_ALLOWED"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// A single constraint violation reported by request validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Offending field, or `None` for a rule spanning the whole object.
    pub field: Option<String>,
    /// Identifier of the rule that failed (e.g. `length`, `email`).
    pub rule: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldViolation {
    /// Key under which the violation is reported: the field name when the
    /// violation belongs to a field, the rule identifier otherwise.
    pub fn key(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.rule)
    }
}

/// The unified application error.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Individual violations; only populated for [`ErrorKind::Validation`].
    pub violations: Vec<FieldViolation>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            violations: Vec::new(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            violations: Vec::new(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error from a list of violations.
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        let message = format!("{} constraint violation(s)", violations.len());
        Self {
            kind: ErrorKind::Validation,
            message,
            violations,
            source: None,
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a constraint-violation error carrying the storage engine's text.
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation, message)
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an invalid-state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidState, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an error for a path no route serves.
    pub fn no_route(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoRoute, message)
    }

    /// Create an error for a method the matched path does not accept.
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            violations: self.violations.clone(),
            source: None,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations = Vec::new();
        flatten_violations(None, &errors, &mut violations);
        Self::validation(violations)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

/// Walks a (possibly nested) validator report and emits one violation per
/// individual failed rule. Keys are visited in sorted order so the output is
/// stable.
fn flatten_violations(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldViolation>,
) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, kind) in entries {
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let field = (key != STRUCT_LEVEL_KEY).then(|| path.clone());
                for err in field_errors {
                    out.push(FieldViolation {
                        field: field.clone(),
                        rule: err.code.to_string(),
                        message: err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string()),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_violations(Some(&path), nested, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_violations(Some(&format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}
