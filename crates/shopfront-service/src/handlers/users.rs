//! User handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use shopfront_core::{User, UserQuery};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// List users, filtered by `role` and truncated by `limit`.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResponse<Vec<User>> {
    ApiResponse::list(state.catalog.list_users(&UserQuery::from_pairs(pairs)))
}

/// Get a user by ID.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<User>, ApiError> {
    Ok(ApiResponse::item(state.catalog.get_user(&id)?))
}
