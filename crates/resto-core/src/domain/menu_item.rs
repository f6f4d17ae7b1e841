// ============================================================================
// Resto Core - Menu Item Entity
// File: crates/resto-core/src/domain/menu_item.rs
// Description: Purchasable dish with pricing, attributes and a category
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use resto_shared::constants::{DEFAULT_MENU_IMAGE, UNCATEGORIZED_LABEL};
use resto_shared::ingredients::join_ingredients;

use crate::domain::category::Category;
use crate::domain::payload::MenuItemPayload;
use crate::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

/// Menu item entity as stored; `category_id` is an unresolved reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100, message = "Menu item name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Description must be between 1 and 500 characters"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub image: String,
    pub category_id: Uuid,

    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_popular: bool,
    pub available: bool,

    pub ingredients: Vec<String>,
    pub nutritional_info: Option<NutritionalInfo>,
    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn create(payload: MenuItemPayload) -> Result<Self, DomainError> {
        Self::with_id(Uuid::new_v4(), payload)
    }

    /// Build the full replacement document for `id`; absent optional
    /// fields fall back to their defaults.
    pub fn with_id(id: Uuid, payload: MenuItemPayload) -> Result<Self, DomainError> {
        let payload = payload.normalized();
        let category_id = payload.check()?;

        let now = Utc::now();
        let item = Self {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            price: payload.price.unwrap_or_default(),
            image: payload.image.unwrap_or_else(|| DEFAULT_MENU_IMAGE.to_string()),
            category_id,
            is_vegetarian: payload.is_vegetarian.unwrap_or(false),
            is_spicy: payload.is_spicy.unwrap_or(false),
            is_popular: payload.is_popular.unwrap_or(false),
            available: payload.available.unwrap_or(true),
            ingredients: payload.ingredients.unwrap_or_default(),
            nutritional_info: payload.nutritional_info,
            order: payload.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        item.validate()
            .map_err(|e| DomainError::validation_failed("Menu item", &e))?;
        Ok(item)
    }

    pub fn ingredients_display(&self) -> String {
        join_ingredients(&self.ingredients)
    }

    pub fn to_payload(&self) -> MenuItemPayload {
        MenuItemPayload {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: Some(self.price),
            image: Some(self.image.clone()),
            category: Some(self.category_id.to_string()),
            is_vegetarian: Some(self.is_vegetarian),
            is_spicy: Some(self.is_spicy),
            is_popular: Some(self.is_popular),
            available: Some(self.available),
            ingredients: Some(self.ingredients.clone()),
            nutritional_info: self.nutritional_info.clone(),
            order: Some(self.order),
        }
    }
}

/// A menu item with its category reference resolved.
///
/// `category` is `None` when the referenced category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemWithCategory {
    #[serde(flatten)]
    pub item: MenuItem,
    pub category: Option<Category>,
}

impl MenuItemWithCategory {
    pub fn new(item: MenuItem, category: Option<Category>) -> Self {
        Self { item, category }
    }

    pub fn id(&self) -> Uuid {
        self.item.id
    }

    /// Id of the resolved category; dangling references yield `None`.
    pub fn resolved_category_id(&self) -> Option<Uuid> {
        self.category.as_ref().map(|c| c.id)
    }

    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> MenuItemPayload {
        MenuItemPayload {
            name: Some("Rendang".to_string()),
            description: Some("Slow-cooked beef".to_string()),
            price: Some(45000.0),
            category: Some(Uuid::new_v4().to_string()),
            ingredients: Some(vec!["beef".to_string(), " chili ".to_string()]),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let item = MenuItem::create(payload()).unwrap();
        assert_eq!(item.image, DEFAULT_MENU_IMAGE);
        assert!(item.available);
        assert!(!item.is_vegetarian && !item.is_spicy && !item.is_popular);
        assert_eq!(item.order, 0);
        assert_eq!(item.ingredients, vec!["beef", "chili"]);
        assert_eq!(item.ingredients_display(), "beef, chili");
    }

    #[test]
    fn test_blank_image_uses_placeholder() {
        let item = MenuItem::create(MenuItemPayload { image: Some("  ".to_string()), ..payload() }).unwrap();
        assert_eq!(item.image, DEFAULT_MENU_IMAGE);
    }

    #[test]
    fn test_zero_price_is_allowed() {
        assert!(MenuItem::create(MenuItemPayload { price: Some(0.0), ..payload() }).is_ok());
    }

    #[test]
    fn test_description_required() {
        let err = MenuItem::create(MenuItemPayload { description: None, ..payload() }).unwrap_err();
        assert!(err.to_string().contains("Please provide a description"));
    }

    #[test]
    fn test_uncategorized_fallback() {
        let item = MenuItem::create(payload()).unwrap();
        let populated = MenuItemWithCategory::new(item, None);
        assert_eq!(populated.category_name(), UNCATEGORIZED_LABEL);
        assert_eq!(populated.resolved_category_id(), None);
    }

    #[test]
    fn test_populated_serialization_shape() {
        let item = MenuItem::create(payload()).unwrap();
        let populated = MenuItemWithCategory::new(item.clone(), None);
        let json = serde_json::to_value(&populated).unwrap();
        assert_eq!(json["categoryId"], serde_json::json!(item.category_id.to_string()));
        assert!(json["category"].is_null());
        assert_eq!(json["isVegetarian"], serde_json::json!(false));

        let back: MenuItemWithCategory = serde_json::from_value(json).unwrap();
        assert_eq!(back.item.id, item.id);
    }
}
