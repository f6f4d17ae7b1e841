//! HTTP implementation of the menu API client port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use resto_core::client::{ClientError, Envelope, MenuApi};
use resto_core::domain::{Category, CategoryPayload, MenuItemPayload, MenuItemWithCategory};

const CATEGORIES_PATH: &str = "/api/categories";
const MENU_ITEMS_PATH: &str = "/api/menu-items";

#[derive(Clone)]
pub struct HttpMenuClient {
    client: Client,
    base_url: String,
}

impl HttpMenuClient {
    /// Fails only when the TLS backend or resolver cannot be initialised.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                warn!("Failed to build menu API client: {}", e);
                ClientError::Transport(e.to_string())
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|e| {
            warn!("Menu API request failed: {}", e);
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        debug!("Menu API responded {} ({} bytes)", status, body.len());

        match serde_json::from_slice::<Envelope<T>>(&body) {
            Ok(envelope) if status.is_success() => envelope.into_result(status.as_u16(), fallback),
            Ok(envelope) => Err(ClientError::Api {
                status: status.as_u16(),
                message: envelope.message.unwrap_or_else(|| fallback.to_string()),
            }),
            Err(_) if !status.is_success() => Err(ClientError::Api {
                status: status.as_u16(),
                message: fallback.to_string(),
            }),
            Err(e) => Err(ClientError::Decode(e.to_string())),
        }
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ClientError> {
        self.send(self.request(method, path).json(body), fallback).await
    }
}

#[async_trait]
impl MenuApi for HttpMenuClient {
    async fn list_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.send(self.request(Method::GET, CATEGORIES_PATH), "Failed to fetch categories")
            .await
    }

    async fn get_category(&self, id: &Uuid) -> Result<Category, ClientError> {
        let path = format!("{}/{}", CATEGORIES_PATH, id);
        self.send(self.request(Method::GET, &path), "Failed to fetch category")
            .await
    }

    async fn create_category(&self, payload: &CategoryPayload) -> Result<Category, ClientError> {
        self.send_json(Method::POST, CATEGORIES_PATH, payload, "Failed to create category")
            .await
    }

    async fn update_category(&self, id: &Uuid, payload: &CategoryPayload) -> Result<Category, ClientError> {
        let path = format!("{}/{}", CATEGORIES_PATH, id);
        self.send_json(Method::PUT, &path, payload, "Failed to update category")
            .await
    }

    async fn delete_category(&self, id: &Uuid) -> Result<(), ClientError> {
        let path = format!("{}/{}", CATEGORIES_PATH, id);
        let _: serde_json::Value = self
            .send(self.request(Method::DELETE, &path), "Failed to delete category")
            .await?;
        Ok(())
    }

    async fn list_menu_items(&self, category: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, ClientError> {
        let path = match category {
            Some(id) => format!("{}?category={}", MENU_ITEMS_PATH, id),
            None => MENU_ITEMS_PATH.to_string(),
        };
        self.send(self.request(Method::GET, &path), "Failed to fetch menu items")
            .await
    }

    async fn get_menu_item(&self, id: &Uuid) -> Result<MenuItemWithCategory, ClientError> {
        let path = format!("{}/{}", MENU_ITEMS_PATH, id);
        self.send(self.request(Method::GET, &path), "Failed to fetch menu item")
            .await
    }

    async fn create_menu_item(&self, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError> {
        self.send_json(Method::POST, MENU_ITEMS_PATH, payload, "Failed to create menu item")
            .await
    }

    async fn update_menu_item(&self, id: &Uuid, payload: &MenuItemPayload) -> Result<MenuItemWithCategory, ClientError> {
        let path = format!("{}/{}", MENU_ITEMS_PATH, id);
        self.send_json(Method::PUT, &path, payload, "Failed to update menu item")
            .await
    }

    async fn delete_menu_item(&self, id: &Uuid) -> Result<(), ClientError> {
        let path = format!("{}/{}", MENU_ITEMS_PATH, id);
        let _: serde_json::Value = self
            .send(self.request(Method::DELETE, &path), "Failed to delete menu item")
            .await?;
        Ok(())
    }
}
