//! Customer record management.

pub mod service;

pub use service::CustomerService;
