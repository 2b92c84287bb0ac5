//! Component API routes.
//!
//! Read-only access to the architecture component catalog.
//!
//! ## Routes
//!
//! - `GET /components` - List components, optionally filtered by difficulty
//! - `GET /components/{id}` - Get component by ID

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use ludo_catalog::{Component, DifficultyLevel};
use ludo_core::ComponentId;

use crate::error::{ApiError, ApiErrorBody};
use crate::server::AppState;

/// Query parameters for listing components.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListComponentsQuery {
    /// Only return components with this difficulty level.
    pub difficulty: Option<DifficultyLevel>,
}

/// Creates component routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/components", get(list_components))
        .route("/components/:id", get(get_component))
}

/// List all architecture components.
///
/// GET /api/v1/components
#[utoipa::path(
    get,
    path = "/api/v1/components",
    tag = "components",
    params(ListComponentsQuery),
    responses(
        (status = 200, description = "Components in ascending step_order", body = Vec<Component>),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn list_components(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListComponentsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let components = state.reader().list_components(query.difficulty).await?;
    Ok(Json(components))
}

/// Get a single component by ID.
///
/// GET /api/v1/components/{id}
#[utoipa::path(
    get,
    path = "/api/v1/components/{id}",
    tag = "components",
    params(
        ("id" = String, Path, description = "Component ID"),
    ),
    responses(
        (status = 200, description = "The component", body = Component),
        (status = 404, description = "Component not found", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn get_component(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // An unparseable ID cannot name any stored document, so it is a 404
    // rather than a validation error.
    let Ok(id) = ComponentId::from_str(&id) else {
        return Err(ApiError::not_found("Component not found"));
    };

    let component = state
        .reader()
        .get_component(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Component not found"))?;
    Ok(Json(component))
}
