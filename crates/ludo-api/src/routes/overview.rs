//! Platform overview route.
//!
//! Headline metrics for the landing view. These are fixed, hand-authored
//! numbers describing the hypothetical platform at full scale; they are not
//! derived from the catalog.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::AppState;

/// Headline platform metrics.
#[derive(Debug, Serialize, ToSchema)]
pub struct OverviewResponse {
    /// Peak concurrent players.
    pub total_concurrent_players: u64,
    /// Game server fleet size.
    pub total_game_servers: u64,
    /// Distinct games hosted.
    pub total_games: u64,
    /// Geographic regions served.
    pub global_regions: u64,
    /// CDN edge locations.
    pub edge_locations: u64,
    /// Aggregate request throughput.
    pub requests_per_second: u64,
    /// Daily data volume in terabytes.
    pub data_processed_per_day_tb: u64,
    /// Availability target as a percentage.
    pub uptime_percentage: f64,
}

/// Creates the overview route.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/overview", get(get_overview))
}

/// Get system overview metrics.
///
/// GET /api/v1/overview
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    tag = "overview",
    responses(
        (status = 200, description = "Headline platform metrics", body = OverviewResponse),
    )
)]
pub(crate) async fn get_overview() -> impl IntoResponse {
    Json(OverviewResponse {
        total_concurrent_players: 26_000_000,
        total_game_servers: 50_000,
        total_games: 1_000_000,
        global_regions: 12,
        edge_locations: 200,
        requests_per_second: 10_000_000,
        data_processed_per_day_tb: 1_000,
        uptime_percentage: 99.99,
    })
}
