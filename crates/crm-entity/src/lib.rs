//! # crm-entity
//!
//! Domain entity models for the restaurant CRM. Database entities derive
//! `sqlx::FromRow` and serialize with camelCase field names, which is the
//! shape the HTTP API returns.

pub mod customer;

pub use customer::{Customer, CustomerDraft, MichelinStatus};
