//! OpenAPI documentation served at `/v3/api-docs` and `/swagger-ui/`.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crm_entity::customer::{Customer, MichelinStatus};

use crate::dto::request::{CustomerRequest, MichelinStatusRequest, VisitRequest};
use crate::dto::response::{
    AppInfo, ComponentHealth, CustomerPage, HealthResponse, HealthStatus, InfoResponse,
};
use crate::error::ErrorDetails;

/// Registers the HTTP Basic security scheme.
struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&BasicAuthAddon),
    info(
        title = "Restaurant CRM API",
        description = "Customer records, visit tracking and Michelin inspector suspicion."
    ),
    paths(
        crate::handlers::customer::create_customer,
        crate::handlers::customer::list_customers,
        crate::handlers::customer::get_customer,
        crate::handlers::customer::update_customer,
        crate::handlers::customer::delete_customer,
        crate::handlers::customer::record_visits,
        crate::handlers::customer::change_michelin_status,
        crate::handlers::actuator::health,
        crate::handlers::actuator::info,
    ),
    components(schemas(
        Customer,
        MichelinStatus,
        CustomerRequest,
        VisitRequest,
        MichelinStatusRequest,
        CustomerPage,
        ErrorDetails,
        HealthResponse,
        HealthStatus,
        ComponentHealth,
        InfoResponse,
        AppInfo,
    )),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "actuator", description = "Health and info probes")
    )
)]
pub struct ApiDoc;
