//! Custom Axum extractors that reject with [`ApiError`](crate::error::ApiError).

pub mod json;
pub mod pagination;
pub mod path;

pub use json::ValidatedJson;
pub use pagination::{ApiQuery, CustomerListParams};
pub use path::ApiPath;
