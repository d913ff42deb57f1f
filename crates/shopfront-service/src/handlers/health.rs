//! Health check handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Service version.
    pub version: String,
    /// Deployment environment label.
    pub environment: String,
    /// Process information.
    pub system: SystemInfo,
}

/// Process information reported by `/health` and `/api/stats`.
#[derive(Debug, Serialize)]
pub struct SystemInfo {
    /// Seconds since startup.
    pub uptime: f64,
    /// Target operating system.
    pub os: &'static str,
    /// Target architecture.
    pub arch: &'static str,
}

impl SystemInfo {
    /// Snapshot for the running service.
    #[must_use]
    pub fn current(state: &AppState) -> Self {
        Self {
            uptime: state.uptime_seconds(),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        system: SystemInfo::current(&state),
    })
}
