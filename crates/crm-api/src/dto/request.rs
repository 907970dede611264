//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError};

use crm_entity::customer::{CustomerDraft, MichelinStatus};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Reads an explicit `null` as an empty string so it fails the blank check
/// like a missing field does.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Required, syntactically valid email. Reports one violation at most.
fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Email is required".into()));
    }
    if !value.validate_email() {
        return Err(ValidationError::new("email").with_message("Invalid email address".into()));
    }
    Ok(())
}

/// Create or full-replace body for a customer.
///
/// Absent or `null` string fields deserialize as empty and fail the blank
/// check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Full name.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub name: String,
    /// Contact phone number.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Phone number is required"),
        length(max = 30, message = "must be at most 30 characters")
    )]
    pub phone: String,
    /// Contact email address.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "email_address"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub email: String,
    /// Allergy notes.
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub allergies: Option<String>,
    /// Visits so far.
    #[serde(default, rename = "visitCount")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub visit_count: i32,
    /// Staff notes.
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub notes: Option<String>,
    /// Inspector suspicion; defaults to `REGULAR`.
    #[serde(default)]
    pub michelin_status: MichelinStatus,
}

impl CustomerRequest {
    /// Convert into the storage draft.
    pub fn into_draft(self) -> CustomerDraft {
        CustomerDraft {
            name: self.name,
            phone: self.phone,
            email: self.email,
            allergies: self.allergies,
            visit_count: self.visit_count,
            notes: self.notes,
            michelin_status: self.michelin_status,
        }
    }
}

/// Visit recording body.
///
/// The lower bound on `count` is a business rule enforced by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VisitRequest {
    /// Visits to add; must be at least 1.
    #[serde(default = "default_visit_count")]
    pub count: i32,
}

fn default_visit_count() -> i32 {
    1
}

/// Michelin status change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MichelinStatusRequest {
    /// Target status.
    pub michelin_status: MichelinStatus,
}
