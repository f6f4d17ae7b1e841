//! Category repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Category;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ascending by display order.
    async fn list(&self) -> Result<Vec<Category>, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Category>, DomainError>;
    async fn create(&self, category: &Category) -> Result<Category, DomainError>;
    /// Replace the editable fields; `None` when the id does not exist.
    async fn update(&self, category: &Category) -> Result<Option<Category>, DomainError>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;
    /// Cheap round trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), DomainError>;
}
