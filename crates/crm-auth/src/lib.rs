//! # crm-auth
//!
//! Authentication and request gating for the restaurant CRM.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing
//! - `basic`: `Authorization: Basic` header parsing
//! - `credential`: the single Basic-auth account held in memory
//! - `access`: ordered path rules deciding which requests need credentials

pub mod access;
pub mod basic;
pub mod credential;
pub mod password;

pub use access::{AccessPolicy, AccessRule, PathPattern, Requirement};
pub use basic::{BasicAuthError, BasicCredentials};
pub use credential::BasicCredential;
pub use password::PasswordHasher;
