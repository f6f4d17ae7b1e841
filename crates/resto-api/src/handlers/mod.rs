//! HTTP handlers

pub mod categories;
pub mod fallback;
pub mod health;
pub mod menu_items;
