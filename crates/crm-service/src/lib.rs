//! # crm-service
//!
//! Business logic for the restaurant CRM. Services depend on the store
//! trait from `crm-database` and return `AppError`s untouched so the HTTP
//! layer can classify them.

pub mod customer;

pub use customer::CustomerService;
