//! Customer entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::status::MichelinStatus;

/// A registered restaurant customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Contact phone number (unique).
    pub phone: String,
    /// Contact email address (unique).
    pub email: String,
    /// Free-text allergy notes.
    pub allergies: Option<String>,
    /// Number of recorded visits.
    pub visit_count: i32,
    /// Free-text staff notes.
    pub notes: Option<String>,
    /// Inspector suspicion level.
    pub michelin_status: MichelinStatus,
}

impl Customer {
    /// Build a customer from a draft and its assigned identifier.
    pub fn from_draft(id: i64, draft: &CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            allergies: draft.allergies.clone(),
            visit_count: draft.visit_count,
            notes: draft.notes.clone(),
            michelin_status: draft.michelin_status,
        }
    }

    /// The writable part of this record.
    pub fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            allergies: self.allergies.clone(),
            visit_count: self.visit_count,
            notes: self.notes.clone(),
            michelin_status: self.michelin_status,
        }
    }
}

/// Data required to create or fully replace a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Free-text allergy notes.
    pub allergies: Option<String>,
    /// Number of recorded visits.
    pub visit_count: i32,
    /// Free-text staff notes.
    pub notes: Option<String>,
    /// Inspector suspicion level.
    pub michelin_status: MichelinStatus,
}

impl CustomerDraft {
    /// A draft with only the required contact fields set.
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            allergies: None,
            visit_count: 0,
            notes: None,
            michelin_status: MichelinStatus::default(),
        }
    }
}
