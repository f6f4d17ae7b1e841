//! Menu item repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{MenuItem, MenuItemWithCategory};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Items ascending by display order with their category resolved,
    /// optionally restricted to one category id.
    async fn list(&self, category_id: Option<Uuid>) -> Result<Vec<MenuItemWithCategory>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<MenuItemWithCategory>, DomainError>;
    async fn create(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn update(&self, item: &MenuItem) -> Result<Option<MenuItem>, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
    async fn count_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError>;
    /// Delete every item referencing `category_id`, returning how many went.
    async fn delete_by_category(&self, category_id: &Uuid) -> Result<u64, DomainError>;
}
