//! # crm-core
//!
//! Core crate for the restaurant CRM backend. Contains the unified error
//! system, configuration schemas, pagination types and the generic
//! repository trait.
//!
//! This crate has **no** internal dependencies on other CRM crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind, FieldViolation};
pub use result::AppResult;
