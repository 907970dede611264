//! # crm-api
//!
//! HTTP API layer for the restaurant CRM built on Axum.
//!
//! Provides the customer REST endpoints, actuator probes, OpenAPI docs,
//! the access gate, and the error hook that turns every raised
//! [`crm_core::AppError`] into a uniform JSON error body.

pub mod app;
pub mod docs;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
