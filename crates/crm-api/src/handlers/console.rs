//! Development console. Only routed when `server.dev_console` is set.

use axum::Json;
use axum::extract::State;

use crate::dto::response::ConsoleSummary;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /db-console/
pub async fn summary(State(state): State<AppState>) -> ApiResult<Json<ConsoleSummary>> {
    Ok(Json(ConsoleSummary {
        provider: state.store.provider_name().to_string(),
        customer_count: state.store.count().await?,
        permit_all: state.policy.is_permit_all(),
    }))
}
