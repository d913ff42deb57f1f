//! Service info, endpoint docs and the unmatched-route fallback.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Greeting.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Named entry points.
    pub endpoints: BTreeMap<&'static str, &'static str>,
    /// Current time, RFC 3339.
    pub timestamp: String,
}

/// One documented endpoint.
#[derive(Debug, Serialize)]
pub struct EndpointDoc {
    /// Route path.
    pub path: &'static str,
    /// HTTP method.
    pub method: &'static str,
    /// What the endpoint returns.
    pub description: &'static str,
    /// Recognized query parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_params: Option<&'static [&'static str]>,
}

/// Docs endpoint response.
#[derive(Debug, Serialize)]
pub struct DocsResponse {
    /// API title.
    pub title: &'static str,
    /// Service version.
    pub version: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Every route.
    pub endpoints: &'static [EndpointDoc],
}

const DESCRIPTION: &str = "Read-only catalog API over users, products and orders";

const ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc {
        path: "/",
        method: "GET",
        description: "Root endpoint with service information",
        query_params: None,
    },
    EndpointDoc {
        path: "/health",
        method: "GET",
        description: "Health check endpoint",
        query_params: None,
    },
    EndpointDoc {
        path: "/api/users",
        method: "GET",
        description: "Get all users",
        query_params: Some(&["role", "limit"]),
    },
    EndpointDoc {
        path: "/api/users/{id}",
        method: "GET",
        description: "Get user by ID",
        query_params: None,
    },
    EndpointDoc {
        path: "/api/products",
        method: "GET",
        description: "Get all products",
        query_params: Some(&["category", "inStock", "limit"]),
    },
    EndpointDoc {
        path: "/api/products/{id}",
        method: "GET",
        description: "Get product by ID",
        query_params: None,
    },
    EndpointDoc {
        path: "/api/orders",
        method: "GET",
        description: "Get all orders with user and product details",
        query_params: Some(&["userId", "status", "limit"]),
    },
    EndpointDoc {
        path: "/api/orders/{id}",
        method: "GET",
        description: "Get order by ID with user and product details",
        query_params: None,
    },
    EndpointDoc {
        path: "/api/stats",
        method: "GET",
        description: "Get catalog statistics",
        query_params: None,
    },
];

/// Root endpoint.
pub async fn root() -> Json<RootResponse> {
    let endpoints = BTreeMap::from([
        ("health", "/health"),
        ("users", "/api/users"),
        ("products", "/api/products"),
        ("orders", "/api/orders"),
        ("stats", "/api/stats"),
        ("docs", "/api/docs"),
    ]);

    Json(RootResponse {
        message: "Welcome to Shopfront!",
        version: env!("CARGO_PKG_VERSION"),
        description: DESCRIPTION,
        endpoints,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Endpoint documentation.
pub async fn docs() -> Json<DocsResponse> {
    Json(DocsResponse {
        title: "Shopfront API",
        version: env!("CARGO_PKG_VERSION"),
        description: DESCRIPTION,
        endpoints: ENDPOINTS,
    })
}

/// Fallback for requests that match no route.
pub async fn not_found() -> ApiError {
    ApiError::EndpointNotFound
}
