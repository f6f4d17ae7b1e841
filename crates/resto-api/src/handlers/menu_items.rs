// ============================================================================
// Resto API - Menu Item Handlers
// File: crates/resto-api/src/handlers/menu_items.rs
// ============================================================================
//! Menu item CRUD (`/api/menu-items`)

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use resto_core::domain::{MenuItemPayload, MenuItemWithCategory};

use crate::error::ApiError;
use crate::extract::{JsonBody, PathId, PathResource, QueryParams};
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

pub struct MenuItemResource;

impl PathResource for MenuItemResource {
    const NOT_FOUND: &'static str = "Menu item not found";
}

#[derive(Debug, Deserialize)]
pub struct MenuItemQuery {
    pub category: Option<String>,
}

/// GET /api/menu-items?category={id}
pub async fn list_menu_items(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MenuItemQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItemWithCategory>>>, ApiError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            resto_shared::parse_id(raw)
                .ok_or_else(|| ApiError::Validation(format!("Invalid category id '{}'", raw)))?,
        ),
    };

    let items = state.catalog.list_menu_items(category).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// POST /api/menu-items
pub async fn create_menu_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MenuItemPayload>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItemWithCategory>>), ApiError> {
    let item = state.catalog.create_menu_item(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(item))))
}

/// GET /api/menu-items/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    PathId(id, ..): PathId<MenuItemResource>,
) -> Result<Json<ApiResponse<MenuItemWithCategory>>, ApiError> {
    let item = state.catalog.get_menu_item(&id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// PUT /api/menu-items/{id}
pub async fn update_menu_item(
    State(state): State<AppState>,
    PathId(id, ..): PathId<MenuItemResource>,
    JsonBody(payload): JsonBody<MenuItemPayload>,
) -> Result<Json<ApiResponse<MenuItemWithCategory>>, ApiError> {
    let item = state.catalog.update_menu_item(&id, payload).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// DELETE /api/menu-items/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    PathId(id, ..): PathId<MenuItemResource>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state.catalog.delete_menu_item(&id).await?;
    Ok(Json(ApiResponse::success(Empty::default())))
}
