//! Menu API client port used by the headless views.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Category, CategoryPayload, MenuItemPayload, MenuItemWithCategory};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The server answered with `success: false`.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }
}

/// Uniform response wrapper returned by every menu endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn the envelope into the payload or an API error carrying `status`.
    pub fn into_result(self, status: u16, fallback: &str) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ClientError::Decode("missing data".to_string())),
            (false, _) => Err(ClientError::Api {
                status,
                message: self.message.unwrap_or_else(|| fallback.to_string()),
            }),
        }
    }
}

#[async_trait]
pub trait MenuApi: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError>;
    async fn get_category(&self, id: &Uuid) -> Result<Category, ClientError>;
    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ClientError>;
    async fn update_category(&self, id: &Uuid, payload: &CategoryPayload) -> Result<Category, ClientError>;
    async fn delete_category(&self, id: &Uuid) -> Result<(), ClientError>;

    async fn list_menu_items(&self, category: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, ClientError>;
    async fn get_menu_item(&self, id: &Uuid) -> Result<MenuItemWithCategory, ClientError>;
    async fn create_menu_item(&self, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError>;
    async fn update_menu_item(&self, id: &Uuid, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError>;
    async fn delete_menu_item(&self, id: &Uuid) -> Result<(), ClientError>;
}
