//! Statistics handler.

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;
use shopfront_core::Stats;

use crate::handlers::health::SystemInfo;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Statistics payload: catalog aggregates plus process information.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Catalog aggregates.
    #[serde(flatten)]
    pub stats: Stats,
    /// Process information.
    pub system: SystemInfo,
}

/// Aggregate statistics over the full catalog. Query parameters are ignored.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResponse<StatsResponse> {
    ApiResponse::item(StatsResponse {
        stats: state.catalog.stats(),
        system: SystemInfo::current(&state),
    })
}
