//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use shopfront_core::CatalogError;

use crate::response::ApiResponse;

/// Paths advertised when a request matches no route.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "/",
    "/health",
    "/api/users",
    "/api/products",
    "/api/orders",
    "/api/docs",
    "/api/stats",
];

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request - invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// No route matched the request.
    #[error("endpoint not found")]
    EndpointNotFound,
}

#[derive(Debug, Serialize)]
struct EndpointHint {
    available_endpoints: &'static [&'static str],
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::failure(msg, None),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ApiResponse::<()>::failure(msg, None)).into_response()
            }
            Self::EndpointNotFound => (
                StatusCode::NOT_FOUND,
                ApiResponse::failure(
                    "Endpoint not found",
                    Some(EndpointHint {
                        available_endpoints: AVAILABLE_ENDPOINTS,
                    }),
                ),
            )
                .into_response(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::debug!(error = %err, "Lookup failed");
        match err {
            CatalogError::InvalidId { entity, .. } => {
                Self::BadRequest(format!("Invalid {entity} ID"))
            }
            CatalogError::NotFound { entity, .. } => {
                Self::NotFound(format!("{} not found", entity.title()))
            }
        }
    }
}
