//! # Resto Infrastructure
//! 
//! Storage and transport adapters: PostgreSQL and in-memory repositories,
//! plus the HTTP implementation of the menu API client.

pub mod database;
pub mod memory;
pub mod http;

pub use database::{create_pool, run_migrations, PgCategoryRepository, PgMenuItemRepository};
pub use memory::InMemoryCatalog;
pub use http::HttpMenuClient;
