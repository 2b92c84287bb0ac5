//! Step API routes.
//!
//! Read-only access to the request-flow walkthrough.
//!
//! ## Routes
//!
//! - `GET /steps` - List all steps in order
//! - `GET /steps/{step_number}` - Get step by sequence number

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use ludo_catalog::Step;

use crate::error::{ApiError, ApiErrorBody};
use crate::server::AppState;

/// Creates step routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/steps", get(list_steps))
        .route("/steps/:step_number", get(get_step))
}

/// List all request-flow steps.
///
/// GET /api/v1/steps
#[utoipa::path(
    get,
    path = "/api/v1/steps",
    tag = "steps",
    responses(
        (status = 200, description = "Steps in ascending step_number", body = Vec<Step>),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn list_steps(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let steps = state.reader().list_steps().await?;
    Ok(Json(steps))
}

/// Get a single step by its sequence number.
///
/// GET /api/v1/steps/{step_number}
#[utoipa::path(
    get,
    path = "/api/v1/steps/{step_number}",
    tag = "steps",
    params(
        ("step_number" = u32, Path, description = "1-based step sequence number"),
    ),
    responses(
        (status = 200, description = "The step", body = Step),
        (status = 404, description = "Step not found", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn get_step(
    State(state): State<Arc<AppState>>,
    Path(step_number): Path<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let step = state
        .reader()
        .get_step(step_number)
        .await?
        .ok_or_else(|| ApiError::not_found("Step not found"))?;
    Ok(Json(step))
}
