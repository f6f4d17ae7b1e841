use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::client::{ClientError, MenuApi};
use crate::domain::{Category, CategoryPayload, MenuItem, MenuItemPayload, MenuItemWithCategory};

/// In-process stand-in for the HTTP menu API.
#[derive(Default)]
pub struct StubMenuApi {
    pub categories: Mutex<Vec<Category>>,
    pub items: Mutex<Vec<MenuItemWithCategory>>,
    pub fail_categories: Mutex<Option<ClientError>>,
    pub fail_items: Mutex<Option<ClientError>>,
    pub fail_deletes: Mutex<Option<ClientError>>,
    pub delay: Mutex<Option<Duration>>,
    pub delete_calls: AtomicUsize,
    pub last_payload: Mutex<Option<MenuItemPayload>>,
}

impl StubMenuApi {
    pub fn with_menu(categories: Vec<Category>, items: Vec<MenuItemWithCategory>) -> Self {
        Self {
            categories: Mutex::new(categories),
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        let delay = *self.delay.lock();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
    }
}

pub fn category(name: &str, order: i32) -> Category {
    Category::create(CategoryPayload {
        name: Some(name.to_string()),
        description: None,
        order: Some(order),
    })
    .unwrap()
}

pub fn item(name: &str, price: f64, category: Option<&Category>, available: bool) -> MenuItemWithCategory {
    let category_id = category.map(|c| c.id).unwrap_or_else(Uuid::new_v4);
    let item = MenuItem::create(MenuItemPayload {
        name: Some(name.to_string()),
        description: Some(format!("{} description", name)),
        price: Some(price),
        category: Some(category_id.to_string()),
        available: Some(available),
        ..Default::default()
    })
    .unwrap();
    MenuItemWithCategory::new(item, category.cloned())
}

fn not_found(what: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{} not found", what),
    }
}

#[async_trait]
impl MenuApi for StubMenuApi {
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.pause().await;
        if let Some(err) = self.fail_categories.lock().clone() {
            return Err(err);
        }
        Ok(self.categories.lock().clone())
    }

    async fn get_category(&self, id: &Uuid) -> Result<Category, ClientError> {
        self.categories
            .lock()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Category"))
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ClientError> {
        let category = Category::create(payload.clone()).map_err(|e| ClientError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        self.categories.lock().push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: &Uuid, payload: &CategoryPayload) -> Result<Category, ClientError> {
        let updated = Category::with_id(*id, payload.clone()).map_err(|e| ClientError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        let mut categories = self.categories.lock();
        let slot = categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| not_found("Category"))?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_category(&self, id: &Uuid) -> Result<(), ClientError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(err) = self.fail_deletes.lock().clone() {
            return Err(err);
        }
        self.categories.lock().retain(|c| &c.id != id);
        Ok(())
    }

    async fn list_menu_items(&self, category: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, ClientError> {
        self.pause().await;
        if let Some(err) = self.fail_items.lock().clone() {
            return Err(err);
        }
        let items = self.items.lock().clone();
        Ok(match category {
            Some(id) => items.into_iter().filter(|i| i.item.category_id == id).collect(),
            None => items,
        })
    }

    async fn get_menu_item(&self, id: &Uuid) -> Result<MenuItemWithCategory, ClientError> {
        self.items
            .lock()
            .iter()
            .find(|i| &i.item.id == id)
            .cloned()
            .ok_or_else(|| not_found("Menu item"))
    }

    async fn create_menu_item(&self, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError> {
        *self.last_payload.lock() = Some(payload.clone());
        let item = MenuItem::create(payload.clone()).map_err(|e| ClientError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        let category = self
            .categories
            .lock()
            .iter()
            .find(|c| c.id == item.category_id)
            .cloned();
        let populated = MenuItemWithCategory::new(item, category);
        self.items.lock().push(populated.clone());
        Ok(populated)
    }

    async fn update_menu_item(&self, id: &Uuid, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError> {
        *self.last_payload.lock() = Some(payload.clone());
        let item = MenuItem::with_id(*id, payload.clone()).map_err(|e| ClientError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        let category = self
            .categories
            .lock()
            .iter()
            .find(|c| c.id == item.category_id)
            .cloned();
        let mut items = self.items.lock();
        let slot = items
            .iter_mut()
            .find(|i| &i.item.id == id)
            .ok_or_else(|| not_found("Menu item"))?;
        *slot = MenuItemWithCategory::new(item, category);
        Ok(slot.clone())
    }

    async fn delete_menu_item(&self, id: &Uuid) -> Result<(), ClientError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(err) = self.fail_deletes.lock().clone() {
            return Err(err);
        }
        self.items.lock().retain(|i| &i.item.id != id);
        Ok(())
    }
}
