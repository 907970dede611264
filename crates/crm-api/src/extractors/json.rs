//! JSON body extractor that runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crm_core::error::AppError;

use crate::error::ApiError;

/// Deserialize a JSON body and validate it.
///
/// Malformed JSON is an invalid argument; rule violations are a
/// validation failure listing every offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| AppError::invalid_argument(rejection.body_text()))?;

        value.validate().map_err(AppError::from)?;
        Ok(Self(value))
    }
}
