//! Route definitions for the restaurant CRM HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Middleware order, outermost first: trace, CORS,
//! compression, request logging, error hook, access gate, panic catcher.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::error::{error_hook, handle_panic};
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mut routes = Router::new()
        .merge(customer_routes())
        .merge(actuator_routes())
        .merge(doc_routes());

    if state.config.server.dev_console {
        routes = routes.merge(console_routes());
    }

    routes
        .fallback(handlers::fallback::no_route)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::access::access_gate,
        ))
        .layer(axum_middleware::from_fn_with_state(state.clone(), error_hook))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(DefaultBodyLimit::max(state.config.server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(middleware::cors::build_cors_layer(&state.config.server.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Customer CRUD, visits and Michelin status
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/customers",
            post(handlers::customer::create_customer).get(handlers::customer::list_customers),
        )
        .route(
            "/api/customers/{id}",
            get(handlers::customer::get_customer)
                .put(handlers::customer::update_customer)
                .delete(handlers::customer::delete_customer),
        )
        .route(
            "/api/customers/{id}/visits",
            post(handlers::customer::record_visits),
        )
        .route(
            "/api/customers/{id}/michelin-status",
            put(handlers::customer::change_michelin_status),
        )
}

/// Health and info probes
fn actuator_routes() -> Router<AppState> {
    Router::new()
        .route("/actuator/health", get(handlers::actuator::health))
        .route("/actuator/info", get(handlers::actuator::info))
}

/// OpenAPI JSON and Swagger UI
fn doc_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/v3/api-docs", ApiDoc::openapi()))
        .route(
            "/swagger-ui.html",
            get(|| async { Redirect::permanent("/swagger-ui/") }),
        )
}

/// Development console
fn console_routes() -> Router<AppState> {
    Router::new()
        .route("/db-console", get(handlers::console::summary))
        .route("/db-console/", get(handlers::console::summary))
}
