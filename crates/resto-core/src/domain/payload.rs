// ============================================================================
// Resto Core - Request Payloads
// File: crates/resto-core/src/domain/payload.rs
// Description: Explicit write schemas for categories and menu items
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::menu_item::NutritionalInfo;
use crate::error::DomainError;

/// Body of a category create/update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    #[validate(
        required(message = "Please provide a category name"),
        length(max = 50, message = "Category name cannot be more than 50 characters")
    )]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Description cannot be more than 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl CategoryPayload {
    /// Trim text fields and treat blank strings as absent.
    pub fn normalized(self) -> Self {
        Self {
            name: trim_to_option(self.name),
            description: trim_to_option(self.description),
            order: self.order,
        }
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::validation_failed("Category", &e))
    }
}

/// Body of a menu item create/update request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPayload {
    #[validate(
        required(message = "Please provide a menu item name"),
        length(max = 100, message = "Menu item name cannot be more than 100 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Please provide a description"),
        length(max = 500, message = "Description cannot be more than 500 characters")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Please provide a price"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[validate(required(message = "Please select a category"))]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_vegetarian: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spicy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionalInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

impl MenuItemPayload {
    pub fn normalized(self) -> Self {
        Self {
            name: trim_to_option(self.name),
            description: trim_to_option(self.description),
            image: trim_to_option(self.image),
            category: trim_to_option(self.category),
            ingredients: self.ingredients.map(|list| {
                list.into_iter()
                    .map(|i| i.trim().to_string())
                    .filter(|i| !i.is_empty())
                    .collect()
            }),
            ..self
        }
    }

    /// Run field validation and resolve the category reference.
    pub fn check(&self) -> Result<Uuid, DomainError> {
        self.validate()
            .map_err(|e| DomainError::validation_failed("Menu item", &e))?;

        // `required` above guarantees presence
        let raw = self.category.as_deref().unwrap_or_default();
        resto_shared::parse_id(raw).ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Menu item validation failed: category: Invalid category id '{}'",
                raw
            ))
        })
    }
}

fn trim_to_option(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
