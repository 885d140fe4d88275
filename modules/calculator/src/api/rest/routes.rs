use std::sync::Arc;

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::dto::{ErrorBody, OperationResponse};
use super::handlers;
use crate::domain::service::CalculatorService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Calculator microservice", description = "Arithmetic operations over HTTP"),
    paths(
        handlers::greeting,
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::power,
        handlers::sqrt,
        handlers::modulo,
    ),
    components(schemas(OperationResponse, ErrorBody))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the REST router for the calculator module.
///
/// The service is injected as an `Extension` so handlers stay plain
/// functions; `enable_docs` additionally exposes the OpenAPI document.
pub fn router(service: Arc<CalculatorService>, enable_docs: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::greeting))
        .route("/add", get(handlers::add))
        .route("/subtract", get(handlers::subtract))
        .route("/multiply", get(handlers::multiply))
        .route("/divide", get(handlers::divide))
        .route("/power", get(handlers::power))
        .route("/sqrt", get(handlers::sqrt))
        .route("/modulo", get(handlers::modulo));

    if enable_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_json));
    }

    router
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
