//! Fixed status/message pairs for the named failure conditions.

use axum::http::StatusCode;

/// Closed set of catalogued failure conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogEntry {
    /// Lookup by id found nothing.
    CustomerNotFound,
    /// Email already used by another customer.
    DuplicateEmail,
    /// Phone number already used by another customer.
    DuplicatePhone,
    /// Anything not otherwise classified.
    InternalServerError,
}

impl CatalogEntry {
    /// Every entry, in declaration order.
    pub const ALL: [CatalogEntry; 4] = [
        Self::CustomerNotFound,
        Self::DuplicateEmail,
        Self::DuplicatePhone,
        Self::InternalServerError,
    ];

    /// HTTP status for this entry.
    pub const fn status(self) -> StatusCode {
        match self {
            Self::CustomerNotFound => StatusCode::NOT_FOUND,
            Self::DuplicateEmail | Self::DuplicatePhone => StatusCode::CONFLICT,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this entry.
    pub const fn message(self) -> &'static str {
        match self {
            Self::CustomerNotFound => "Customer not found",
            Self::DuplicateEmail => "Email already exists",
            Self::DuplicatePhone => "Phone number already exists",
            Self::InternalServerError => "An internal server error occurred",
        }
    }

    /// Stable upper-snake-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicatePhone => "DUPLICATE_PHONE",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}
