//! Handlers for the `/categories` resource.
//!
//! Each handler decodes its input, calls [`CategoryService`](crate::services::CategoryService),
//! and wraps the result in an [`Envelope`]. Failures propagate as
//! [`AppError`](crate::error::AppError) and are rendered by its `IntoResponse`.

use axum::extract::State;
use axum::response::IntoResponse;
use category_core::types::DbId;
use category_db::models::category::{CategoryCreateRequest, CategoryUpdateRequest};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories.find_all().await?;

    Ok(Envelope::ok(categories))
}

/// GET /api/categories/{category_id}
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.find_by_id(category_id).await?;

    Ok(Envelope::ok(category))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CategoryCreateRequest>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.create(input).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok(Envelope::ok(category))
}

/// PUT /api/categories/{category_id}
///
/// Replaces the name; there is no partial update.
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<CategoryUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.update(category_id, input).await?;

    tracing::info!(category_id, "Category updated");

    Ok(Envelope::ok(category))
}

/// DELETE /api/categories/{category_id}
///
/// Responds with `data: null` on success.
pub async fn delete_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.categories.delete(category_id).await?;

    tracing::info!(category_id, "Category deleted");

    Ok(Envelope::ok(()))
}
