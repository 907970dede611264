//! Query string extraction and list parameters.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crm_core::error::AppError;
use crm_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

use crate::error::ApiError;

/// Like [`Query`], but a malformed query string is an invalid argument.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_argument(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query parameters for the customer list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 25, max: 100).
    pub page_size: Option<u64>,
    /// Case-insensitive search over name, email and phone.
    pub q: Option<String>,
}

impl CustomerListParams {
    /// Page request with defaults applied and bounds clamped.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}
