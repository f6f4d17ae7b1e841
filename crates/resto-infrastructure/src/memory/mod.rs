//! In-memory catalog store
//!
//! Backs both repository traits with `DashMap`s. Used by the server when
//! `storage.backend = "memory"` and by the API tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info};
use uuid::Uuid;

use resto_core::domain::{Category, MenuItem, MenuItemWithCategory};
use resto_core::error::DomainError;
use resto_core::repositories::{CategoryRepository, MenuItemRepository};

#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    categories: Arc<DashMap<Uuid, Category>>,
    menu_items: Arc<DashMap<Uuid, MenuItem>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        info!("Initializing in-memory catalog store");
        Self::default()
    }

    fn populate(&self, item: MenuItem) -> MenuItemWithCategory {
        let category = self
            .categories
            .get(&item.category_id)
            .map(|entry| entry.value().clone());
        MenuItemWithCategory::new(item, category)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        categories.sort_by(|a, b| (a.order, a.created_at).cmp(&(b.order, b.created_at)));
        Ok(categories)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError> {
        Ok(self.categories.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, category: &Category) -> Result<Category, DomainError> {
        self.categories.insert(category.id, category.clone());
        debug!("Stored category {}", category.id);
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, DomainError> {
        let Some(mut entry) = self.categories.get_mut(&category.id) else {
            return Ok(None);
        };
        let stored = entry.value_mut();
        stored.name = category.name.clone();
        stored.description = category.description.clone();
        stored.order = category.order;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.categories.remove(id).is_some())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryCatalog {
    async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, DomainError> {
        let mut items: Vec<MenuItem> = self
            .menu_items
            .iter()
            .filter(|entry| category_id.map_or(true, |id| entry.value().category_id == id))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| (a.order, a.created_at).cmp(&(b.order, b.created_at)));

        Ok(items.into_iter().map(|item| self.populate(item)).collect())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItemWithCategory>, DomainError> {
        let item = self.menu_items.get(id).map(|entry| entry.value().clone());
        Ok(item.map(|item| self.populate(item)))
    }

    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        self.menu_items.insert(item.id, item.clone());
        debug!("Stored menu item {}", item.id);
        Ok(item.clone())
    }

    async fn update(&self, item: &MenuItem) -> Result<Option<MenuItem>, DomainError> {
        let Some(mut entry) = self.menu_items.get_mut(&item.id) else {
            return Ok(None);
        };
        let created_at = entry.value().created_at;
        *entry.value_mut() = MenuItem {
            created_at,
            updated_at: Utc::now(),
            ..item.clone()
        };
        Ok(Some(entry.value().clone()))
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        Ok(self.menu_items.remove(id).is_some())
    }

    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        let count = self
            .menu_items
            .iter()
            .filter(|entry| &entry.value().category_id == category_id)
            .count();
        Ok(count as u64)
    }

    async fn delete_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError> {
        let before = self.menu_items.len();
        self.menu_items.retain(|_, item| &item.category_id != category_id);
        Ok((before - self.menu_items.len()) as u64)
    }
}
