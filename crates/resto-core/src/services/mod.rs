//! Domain services (business logic)

pub mod catalog_service;

pub use catalog_service::{CatalogService, CategoryDeletion};
