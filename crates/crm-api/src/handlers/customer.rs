//! Customer CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crm_entity::customer::Customer;

use crate::dto::request::{CustomerRequest, MichelinStatusRequest, VisitRequest};
use crate::dto::response::CustomerPage;
use crate::error::{ApiResult, ErrorDetails};
use crate::extractors::{ApiPath, ApiQuery, CustomerListParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer registered", body = Customer),
        (status = 400, description = "Validation failed", body = ErrorDetails),
        (status = 409, description = "Email or phone already in use", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CustomerRequest>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let customer = state.customer_service.create(req.into_draft()).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    params(CustomerListParams),
    responses(
        (status = 200, description = "One page of customers", body = CustomerPage),
        (status = 400, description = "Malformed query", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn list_customers(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CustomerListParams>,
) -> ApiResult<Json<CustomerPage>> {
    let page = state
        .customer_service
        .list(params.q.as_deref(), &params.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/customers/{id}
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "The customer", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn get_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(state.customer_service.get(id).await?))
}

/// PUT /api/customers/{id}
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer replaced", body = Customer),
        (status = 400, description = "Validation failed", body = ErrorDetails),
        (status = 404, description = "Customer not found", body = ErrorDetails),
        (status = 409, description = "Email or phone already in use", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn update_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<CustomerRequest>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .customer_service
        .update(id, req.into_draft())
        .await?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state.customer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/customers/{id}/visits
#[utoipa::path(
    post,
    path = "/api/customers/{id}/visits",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = VisitRequest,
    responses(
        (status = 200, description = "Visits recorded", body = Customer),
        (status = 400, description = "Count below 1", body = ErrorDetails),
        (status = 404, description = "Customer not found", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn record_visits(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<VisitRequest>,
) -> ApiResult<Json<Customer>> {
    let customer = state.customer_service.record_visits(id, req.count).await?;
    Ok(Json(customer))
}

/// PUT /api/customers/{id}/michelin-status
#[utoipa::path(
    put,
    path = "/api/customers/{id}/michelin-status",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = MichelinStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorDetails),
    ),
    security(("basic_auth" = []))
)]
pub async fn change_michelin_status(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<MichelinStatusRequest>,
) -> ApiResult<Json<Customer>> {
    let customer = state
        .customer_service
        .change_michelin_status(id, req.michelin_status)
        .await?;
    Ok(Json(customer))
}
