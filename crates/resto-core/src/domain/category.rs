// ============================================================================
// Resto Core - Category Entity
// File: crates/resto-core/src/domain/category.rs
// Description: Named grouping used to organise menu items
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::payload::CategoryPayload;
use crate::error::DomainError;

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,

    #[validate(length(min = 1, max = 50, message = "Category name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description cannot be more than 200 characters"))]
    pub description: Option<String>,

    pub order: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Build a new category from a request body.
    pub fn create(payload: CategoryPayload) -> Result<Self, DomainError> {
        Self::with_id(Uuid::new_v4(), payload)
    }

    /// Build the replacement document for an existing category id.
    pub fn with_id(id: Uuid, payload: CategoryPayload) -> Result<Self, DomainError> {
        let payload = payload.normalized();
        payload.check()?;

        let now = Utc::now();
        let category = Self {
            id,
            name: payload.name.unwrap_or_default(),
            description: payload.description,
            order: payload.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        category
            .validate()
            .map_err(|e| DomainError::validation_failed("Category", &e))?;
        Ok(category)
    }

    /// Payload that reproduces this category, used to prefill edit forms.
    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            order: Some(self.order),
        }
    }
}
