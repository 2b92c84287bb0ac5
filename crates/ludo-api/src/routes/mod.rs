//! HTTP route handlers.

pub mod capacity;
pub mod components;
pub mod overview;
pub mod steps;

use std::sync::Arc;

use axum::Router;

use crate::server::AppState;

/// `/api/v1` routes.
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(components::routes())
        .merge(steps::routes())
        .merge(capacity::routes())
        .merge(overview::routes())
}
