//! Core traits defined in `crm-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
