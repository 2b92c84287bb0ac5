//! `OpenAPI` (3.1) specification generation for `ludo-api`.
//!
//! The generated document is served at `/openapi.json` and can be used to
//! generate frontend clients or detect breaking API changes in CI.

use utoipa::OpenApi;

/// `OpenAPI` documentation for the Ludo REST API (`/api/v1/*`).
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ludo API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Educational REST API exploring a large-scale gaming platform's architecture"
    ),
    paths(
        crate::routes::components::list_components,
        crate::routes::components::get_component,
        crate::routes::steps::list_steps,
        crate::routes::steps::get_step,
        crate::routes::capacity::calculate_capacity,
        crate::routes::overview::get_overview,
    ),
    components(
        schemas(
            crate::error::ApiErrorBody,
            crate::routes::capacity::CapacityRequest,
            crate::routes::capacity::CapacityResponse,
            crate::routes::overview::OverviewResponse,
            ludo_catalog::Category,
            ludo_catalog::Component,
            ludo_catalog::DifficultyLevel,
            ludo_catalog::Position,
            ludo_catalog::Step,
        )
    ),
    tags(
        (name = "components", description = "Architecture component catalog"),
        (name = "steps", description = "Request-flow walkthrough"),
        (name = "capacity", description = "Capacity estimation"),
        (name = "overview", description = "Headline platform metrics"),
    ),
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Returns the generated `OpenAPI` spec serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen).
pub fn openapi_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&openapi())
}
