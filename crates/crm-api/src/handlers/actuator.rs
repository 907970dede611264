//! Health and info probes.

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{AppInfo, ComponentHealth, HealthResponse, HealthStatus, InfoResponse};
use crate::state::AppState;

/// GET /actuator/health
#[utoipa::path(
    get,
    path = "/actuator/health",
    tag = "actuator",
    responses(
        (status = 200, description = "All components up", body = HealthResponse),
        (status = 503, description = "A component is down", body = HealthResponse),
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db = match state.store.health_check().await {
        Ok(()) => HealthStatus::Up,
        Err(err) => {
            warn!(error = %err, "Store health check failed");
            HealthStatus::Down
        }
    };

    let components = BTreeMap::from([("db".to_string(), ComponentHealth { status: db })]);
    let code = match db {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(HealthResponse { status: db, components }))
}

/// GET /actuator/info
#[utoipa::path(
    get,
    path = "/actuator/info",
    tag = "actuator",
    responses((status = 200, description = "Application identity", body = InfoResponse))
)]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app: AppInfo {
            name: "restaurant-crm".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Customer relationship management backend for restaurants".to_string(),
        },
    })
}
