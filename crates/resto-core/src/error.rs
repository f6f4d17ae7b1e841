//! Domain errors

use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Menu item not found")]
    MenuItemNotFound,

    #[error("{0}")]
    ValidationError(String),

    #[error("Category {category_id} is still referenced by {count} menu item(s)")]
    CategoryInUse { category_id: Uuid, count: u64 },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Flatten validator output into a single readable message,
    /// e.g. `Menu item validation failed: price: Price cannot be negative`.
    pub fn validation_failed(entity: &str, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let details = fields
            .iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, message)
            })
            .collect::<Vec<_>>()
            .join(", ");

        DomainError::ValidationError(format!("{} validation failed: {}", entity, details))
    }
}
