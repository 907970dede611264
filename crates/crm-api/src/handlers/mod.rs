//! Request handlers organized by resource.

pub mod actuator;
pub mod console;
pub mod customer;
pub mod fallback;
