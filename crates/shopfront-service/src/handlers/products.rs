//! Product handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use shopfront_core::{Product, ProductQuery};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List products, filtered by `category` and `inStock`, truncated by `limit`.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResponse<Vec<Product>> {
    ApiResponse::list(state.catalog.list_products(&ProductQuery::from_pairs(pairs)))
}

/// Get a product by ID.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Product>, ApiError> {
    Ok(ApiResponse::item(state.catalog.get_product(&id)?))
}
