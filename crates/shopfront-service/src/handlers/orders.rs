//! Order handlers.
//!
//! Both endpoints embed the referenced user and product in each order.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use shopfront_core::{Order, OrderQuery};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List orders, filtered by `userId` and `status`, truncated by `limit`.
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResponse<Vec<Order>> {
    ApiResponse::list(state.catalog.list_orders(&OrderQuery::from_pairs(pairs)))
}

/// Get an order by ID.
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Order>, ApiError> {
    Ok(ApiResponse::item(state.catalog.get_order(&id)?))
}
