//! Handler for the category listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::category::{CategoryListResponse, category_map};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories as an `{id: type}` mapping.
///
/// # Endpoint
///
/// `GET /categories`
///
/// # Errors
///
/// Returns 404 when no categories exist.
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.categories.list().await.map_err(AppError::internal)?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
    }))
}
