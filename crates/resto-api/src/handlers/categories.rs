// ============================================================================
// Resto API - Category Handlers
// File: crates/resto-api/src/handlers/categories.rs
// ============================================================================
//! Category CRUD (`/api/categories`)

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use resto_core::domain::{Category, CategoryPayload};

use crate::error::ApiError;
use crate::extract::{JsonBody, PathId, PathResource};
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

pub struct CategoryResource;

impl PathResource for CategoryResource {
    const NOT_FOUND: &'static str = "Category not found";
}

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.catalog.list_categories().await?;
    Ok(Json(ApiResponse::success(categories)))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    let category = state.catalog.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    PathId(id, ..): PathId<CategoryResource>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.catalog.get_category(&id).await?;
    Ok(Json(ApiResponse::success(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    PathId(id, ..): PathId<CategoryResource>,
    JsonBody(payload): JsonBody<CategoryPayload>,
) -> Result<Json<ApiResponse<Category>>, ApiError> {
    let category = state.catalog.update_category(&id, payload).await?;
    Ok(Json(ApiResponse::success(category)))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    PathId(id, ..): PathId<CategoryResource>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.catalog.delete_category(&id).await?;
    Ok(Json(ApiResponse::success(Empty::default())))
}
