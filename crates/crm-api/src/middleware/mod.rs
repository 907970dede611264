//! Axum middleware stack.

pub mod access;
pub mod cors;
pub mod logging;
