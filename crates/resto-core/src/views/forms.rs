// ============================================================================
// Resto Core - Admin Forms
// File: crates/resto-core/src/views/forms.rs
// ============================================================================
//! Editable text state for the category and menu item admin forms.

use tracing::info;
use uuid::Uuid;

use resto_shared::currency::parse_leading_number;
use resto_shared::ingredients::{join_ingredients, split_ingredients};

use crate::cancel::CancelSignal;
use crate::client::{ClientError, MenuApi};
use crate::domain::{Category, CategoryPayload, MenuItemPayload, MenuItemWithCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Whole-number prefix of `input`, e.g. `"3rd"` -> 3. Blank or non-numeric
/// input yields `None`.
fn parse_order(input: &str) -> Option<i32> {
    parse_leading_number(input).map(|n| n.trunc() as i32)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub order: String,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self {
            order: "0".to_string(),
            ..Default::default()
        }
    }

    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            order: category.order.to_string(),
        }
    }

    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            order: parse_order(&self.order),
        }
        .normalized()
    }

    pub async fn submit(
        &self,
        mode: FormMode,
        api: &dyn MenuApi,
        cancel: &CancelSignal,
    ) -> Result<Category, ClientError> {
        let payload = self.to_payload();
        let saved = match mode {
            FormMode::Create => cancel.guard(api.create_category(&payload)).await?,
            FormMode::Edit(id) => cancel.guard(api.update_category(&id, &payload)).await?,
        };
        info!("Category form saved: {}", saved.id);
        Ok(saved)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_popular: bool,
    pub available: bool,
    pub ingredients: String,
    pub order: String,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image: String::new(),
            category: String::new(),
            is_vegetarian: false,
            is_spicy: false,
            is_popular: false,
            available: true,
            ingredients: String::new(),
            order: "0".to_string(),
        }
    }
}

impl MenuItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_item(populated: &MenuItemWithCategory) -> Self {
        let item = &populated.item;
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            image: item.image.clone(),
            category: populated
                .resolved_category_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            is_vegetarian: item.is_vegetarian,
            is_spicy: item.is_spicy,
            is_popular: item.is_popular,
            available: item.available,
            ingredients: join_ingredients(&item.ingredients),
            order: item.order.to_string(),
        }
    }

    /// An unparseable price is sent as absent and rejected server-side.
    pub fn to_payload(&self) -> MenuItemPayload {
        MenuItemPayload {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: parse_leading_number(&self.price),
            image: Some(self.image.clone()),
            category: Some(self.category.clone()),
            is_vegetarian: Some(self.is_vegetarian),
            is_spicy: Some(self.is_spicy),
            is_popular: Some(self.is_popular),
            available: Some(self.available),
            ingredients: Some(split_ingredients(&self.ingredients)),
            nutritional_info: None,
            order: parse_order(&self.order),
        }
        .normalized()
    }

    pub async fn submit(
        &self,
        mode: FormMode,
        api: &dyn MenuApi,
        cancel: &CancelSignal,
    ) -> Result<MenuItemWithCategory, ClientError> {
        let payload = self.to_payload();
        let saved = match mode {
            FormMode::Create => cancel.guard(api.create_menu_item(&payload)).await?,
            FormMode::Edit(id) => cancel.guard(api.update_menu_item(&id, &payload)).await?,
        };
        info!("Menu item form saved: {}", saved.id());
        Ok(saved)
    }
}
