//! The JSON envelope shared by every `/api` endpoint.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard response body: `{success, count?, data?, message?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,

    /// Number of items in `data`, for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Response payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message, for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful list response; `count` is the list length.
    #[must_use]
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Successful single-item response.
    #[must_use]
    pub fn item(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
        }
    }

    /// Failure response carrying a message and optional details.
    #[must_use]
    pub fn failure(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: false,
            count: None,
            data,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
