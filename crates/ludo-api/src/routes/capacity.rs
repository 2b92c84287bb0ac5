//! Capacity calculation route.
//!
//! Resolves the target component, dispatches on its category, and returns
//! derived sizing metrics. The calculation itself is pure and lives in
//! `ludo_catalog::capacity`.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use ludo_catalog::calculate;
use ludo_core::ComponentId;

use crate::error::{ApiError, ApiErrorBody};
use crate::server::AppState;

/// Request for a capacity calculation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CapacityRequest {
    /// ID of the component to size.
    pub component_id: String,
    /// Client-chosen label for the calculation; echoed back unchanged.
    pub calculation_type: String,
    /// Numeric inputs by name. Missing inputs fall back to defaults.
    #[serde(default)]
    pub inputs: BTreeMap<String, f64>,
}

/// Response for a capacity calculation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CapacityResponse {
    /// ID of the sized component.
    pub component_id: String,
    /// Echo of the request's calculation label.
    pub calculation_type: String,
    /// Echo of the effective request inputs.
    pub inputs: BTreeMap<String, f64>,
    /// Derived metric name to value.
    #[schema(value_type = Object)]
    pub result: Map<String, Value>,
    /// Natural-language summary of the result.
    pub explanation: String,
}

/// Creates the capacity calculation route.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/calculate-capacity", post(calculate_capacity))
}

/// Calculate capacity metrics for a component.
///
/// POST /api/v1/calculate-capacity
#[utoipa::path(
    post,
    path = "/api/v1/calculate-capacity",
    tag = "capacity",
    request_body = CapacityRequest,
    responses(
        (status = 200, description = "Derived capacity metrics", body = CapacityResponse),
        (status = 400, description = "Invalid inputs", body = ApiErrorBody),
        (status = 404, description = "Component not found", body = ApiErrorBody),
        (status = 500, description = "Internal error", body = ApiErrorBody),
    )
)]
pub(crate) async fn calculate_capacity(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CapacityRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(id) = ComponentId::from_str(&request.component_id) else {
        return Err(ApiError::not_found("Component not found"));
    };

    let component = state
        .reader()
        .get_component(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Component not found"))?;

    let calculation = calculate(component.category, &request.inputs)?;

    tracing::debug!(
        component = %component.name,
        category = %component.category,
        "Capacity calculated"
    );

    Ok(Json(CapacityResponse {
        component_id: request.component_id,
        calculation_type: request.calculation_type,
        inputs: request.inputs,
        result: calculation.result,
        explanation: calculation.explanation,
    }))
}
