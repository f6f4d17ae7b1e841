//! Route table

use axum::{routing::get, Router};

use crate::handlers::{categories, fallback, health, menu_items};
use crate::state::AppState;

/// Health and `/api` routes. Unmatched paths and methods answer in the
/// error envelope. Transport layers (CORS, tracing, static files) are added
/// by the binary.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/menu-items",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            get(menu_items::get_menu_item)
                .put(menu_items::update_menu_item)
                .delete(menu_items::delete_menu_item),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", api_routes)
        .fallback(fallback::route_not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .with_state(state)
}
