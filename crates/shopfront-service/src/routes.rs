//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, index, orders, products, stats, users};
use crate::state::AppState;

/// Maximum concurrent requests for `/api` endpoints.
const API_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Service
/// - `GET /` - Service information
/// - `GET /health` - Health check
///
/// ## API
/// - `GET /api/docs` - Endpoint documentation
/// - `GET /api/users` - List users (`role`, `limit`)
/// - `GET /api/users/:id` - Get user
/// - `GET /api/products` - List products (`category`, `inStock`, `limit`)
/// - `GET /api/products/:id` - Get product
/// - `GET /api/orders` - List enriched orders (`userId`, `status`, `limit`)
/// - `GET /api/orders/:id` - Get enriched order
/// - `GET /api/stats` - Catalog statistics
///
/// Anything else answers 404 with the list of available endpoints.
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route("/docs", get(index::docs))
        // Users
        .route("/users", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        // Products
        .route("/products", get(products::list_products))
        .route("/products/:id", get(products::get_product))
        // Orders
        .route("/orders", get(orders::list_orders))
        .route("/orders/:id", get(orders::get_order))
        // Aggregates
        .route("/stats", get(stats::get_stats))
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        .route("/", get(index::root))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        .fallback(index::not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
