// ============================================================================
// Resto Core - Catalog Service
// File: crates/resto-core/src/services/catalog_service.rs
// ============================================================================
//! Category and menu item operations behind the menu API.

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use resto_shared::ReferencePolicy;

use crate::domain::{Category, CategoryPayload, MenuItem, MenuItemPayload, MenuItemWithCategory};
use crate::error::DomainError;
use crate::repositories::{CategoryRepository, MenuItemRepository};

/// Catalog service for categories and menu items.
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    menu_items: Arc<dyn MenuItemRepository>,
    delete_policy: ReferencePolicy,
}

/// What a category deletion did to the items that referenced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDeletion {
    pub policy: ReferencePolicy,
    pub items_deleted: u64,
}

impl CatalogService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        menu_items: Arc<dyn MenuItemRepository>,
        delete_policy: ReferencePolicy,
    ) -> Self {
        Self {
            categories,
            menu_items,
            delete_policy,
        }
    }

    pub fn delete_policy(&self) -> ReferencePolicy {
        self.delete_policy
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.categories.ping().await
    }

    // ---------------------------------------------------------------------
    // Categories
    // ---------------------------------------------------------------------

    pub async fn list_categories(&self) -> Result<Vec<Category>, DomainError> {
        let categories = self.categories.list().await?;
        debug!("Listed {} categories", categories.len());
        Ok(categories)
    }

    pub async fn get_category(&self, id: &Uuid) -> Result<Category, DomainError> {
        self.categories.find_by_id(id).await?.ok_or_else(|| {
            warn!("Category not found: {}", id);
            DomainError::CategoryNotFound
        })
    }

    pub async fn create_category(&self, payload: CategoryPayload) -> Result<Category, DomainError> {
        let category = Category::create(payload).inspect_err(|e| {
            warn!("Category create rejected: {}", e);
        })?;

        let created = self.categories.create(&category).await?;
        info!("Category created: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_category(
        &self,
        id: &Uuid,
        payload: CategoryPayload,
    ) -> Result<Category, DomainError> {
        let category = Category::with_id(*id, payload).inspect_err(|e| {
            warn!("Category update rejected for {}: {}", id, e);
        })?;

        let updated = self
            .categories
            .update(&category)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;
        info!("Category updated: {}", id);
        Ok(updated)
    }

    /// Delete a category and apply the configured policy to its items.
    pub async fn delete_category(&self, id: &Uuid) -> Result<CategoryDeletion, DomainError> {
        if self.categories.find_by_id(id).await?.is_none() {
            warn!("Delete failed: category not found: {}", id);
            return Err(DomainError::CategoryNotFound);
        }

        let mut items_deleted = 0;
        match self.delete_policy {
            ReferencePolicy::Orphan => {}
            ReferencePolicy::Restrict => {
                let count = self.menu_items.count_by_category(id).await?;
                if count > 0 {
                    warn!("Delete refused: category {} still has {} item(s)", id, count);
                    return Err(DomainError::CategoryInUse { category_id: *id, count });
                }
            }
            ReferencePolicy::Cascade => {
                items_deleted = self.menu_items.delete_by_category(id).await?;
            }
        }

        if !self.categories.delete(id).await? {
            return Err(DomainError::CategoryNotFound);
        }

        info!(
            "Category deleted: {} (policy: {}, items deleted: {})",
            id, self.delete_policy, items_deleted
        );
        Ok(CategoryDeletion {
            policy: self.delete_policy,
            items_deleted,
        })
    }

    // ---------------------------------------------------------------------
    // Menu items
    // ---------------------------------------------------------------------

    pub async fn list_menu_items(
        &self,
        category_id: Option<Uuid>,
    ) -> Result<Vec<MenuItemWithCategory>, DomainError> {
        let items = self.menu_items.list(category_id).await?;
        debug!("Listed {} menu items (filter: {:?})", items.len(), category_id);
        Ok(items)
    }

    pub async fn get_menu_item(&self, id: &Uuid) -> Result<MenuItemWithCategory, DomainError> {
        self.menu_items.find_by_id(id).await?.ok_or_else(|| {
            warn!("Menu item not found: {}", id);
            DomainError::MenuItemNotFound
        })
    }

    pub async fn create_menu_item(
        &self,
        payload: MenuItemPayload,
    ) -> Result<MenuItemWithCategory, DomainError> {
        let item = MenuItem::create(payload).inspect_err(|e| {
            warn!("Menu item create rejected: {}", e);
        })?;
        let category = self.require_category(&item.category_id).await?;

        let created = self.menu_items.create(&item).await?;
        info!("Menu item created: {} ({})", created.name, created.id);
        Ok(MenuItemWithCategory::new(created, Some(category)))
    }

    pub async fn update_menu_item(
        &self,
        id: &Uuid,
        payload: MenuItemPayload,
    ) -> Result<MenuItemWithCategory, DomainError> {
        let item = MenuItem::with_id(*id, payload).inspect_err(|e| {
            warn!("Menu item update rejected for {}: {}", id, e);
        })?;
        if self.menu_items.find_by_id(id).await?.is_none() {
            warn!("Update failed: menu item not found: {}", id);
            return Err(DomainError::MenuItemNotFound);
        }
        let category = self.require_category(&item.category_id).await?;

        let updated = self
            .menu_items
            .update(&item)
            .await?
            .ok_or(DomainError::MenuItemNotFound)?;
        info!("Menu item updated: {}", id);
        Ok(MenuItemWithCategory::new(updated, Some(category)))
    }

    pub async fn delete_menu_item(&self, id: &Uuid) -> Result<(), DomainError> {
        if !self.menu_items.delete(id).await? {
            warn!("Delete failed: menu item not found: {}", id);
            return Err(DomainError::MenuItemNotFound);
        }
        info!("Menu item deleted: {}", id);
        Ok(())
    }

    /// Writes must reference a category that exists at write time.
    async fn require_category(&self, id: &Uuid) -> Result<Category, DomainError> {
        self.categories.find_by_id(id).await?.ok_or_else(|| {
            warn!("Menu item references unknown category: {}", id);
            DomainError::ValidationError(format!(
                "Menu item validation failed: category: Category {} not found",
                id
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockCategoryRepository, MockMenuItemRepository};
    use mockall::predicate::eq;

    fn category(name: &str) -> Category {
        Category::create(CategoryPayload {
            name: Some(name.to_string()),
            description: None,
            order: Some(1),
        })
        .unwrap()
    }

    fn item_payload(category_id: Uuid) -> MenuItemPayload {
        MenuItemPayload {
            name: Some("Gado-gado".to_string()),
            description: Some("Vegetables with peanut sauce".to_string()),
            price: Some(18000.0),
            category: Some(category_id.to_string()),
            is_vegetarian: Some(true),
            ..Default::default()
        }
    }

    fn service(
        categories: MockCategoryRepository,
        items: MockMenuItemRepository,
        policy: ReferencePolicy,
    ) -> CatalogService {
        CatalogService::new(Arc::new(categories), Arc::new(items), policy)
    }

    #[tokio::test]
    async fn test_create_category_persists_validated_record() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_create()
            .times(1)
            .returning(|c| Ok(c.clone()));

        let svc = service(categories, MockMenuItemRepository::new(), ReferencePolicy::Orphan);
        let created = svc
            .create_category(CategoryPayload {
                name: Some(" Drinks ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.name, "Drinks");
    }

    #[tokio::test]
    async fn test_invalid_category_never_reaches_store() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_create().never();

        let svc = service(categories, MockMenuItemRepository::new(), ReferencePolicy::Orphan);
        let err = svc.create_category(CategoryPayload::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_get_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(categories, MockMenuItemRepository::new(), ReferencePolicy::Orphan);
        let err = svc.get_category(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_update().returning(|_| Ok(None));

        let svc = service(categories, MockMenuItemRepository::new(), ReferencePolicy::Orphan);
        let err = svc
            .update_category(
                &Uuid::new_v4(),
                CategoryPayload { name: Some("Soup".to_string()), ..Default::default() },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::CategoryNotFound));
    }

    #[tokio::test]
    async fn test_orphan_policy_leaves_items_alone() {
        let cat = category("Snacks");
        let id = cat.id;

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(cat.clone())));
        categories.expect_delete().with(eq(id)).times(1).returning(|_| Ok(true));

        let mut items = MockMenuItemRepository::new();
        items.expect_delete_by_category().never();
        items.expect_count_by_category().never();

        let svc = service(categories, items, ReferencePolicy::Orphan);
        let outcome = svc.delete_category(&id).await.unwrap();
        assert_eq!(outcome.items_deleted, 0);
        assert_eq!(outcome.policy, ReferencePolicy::Orphan);
    }

    #[tokio::test]
    async fn test_restrict_policy_refuses_referenced_category() {
        let cat = category("Mains");
        let id = cat.id;

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(move |_| Ok(Some(cat.clone())));
        categories.expect_delete().never();

        let mut items = MockMenuItemRepository::new();
        items.expect_count_by_category().with(eq(id)).returning(|_| Ok(3));

        let svc = service(categories, items, ReferencePolicy::Restrict);
        let err = svc.delete_category(&id).await.unwrap_err();
        assert!(matches!(err, DomainError::CategoryInUse { count: 3, .. }));
    }

    #[tokio::test]
    async fn test_cascade_policy_deletes_items() {
        let cat = category("Seafood");
        let id = cat.id;

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(move |_| Ok(Some(cat.clone())));
        categories.expect_delete().returning(|_| Ok(true));

        let mut items = MockMenuItemRepository::new();
        items
            .expect_delete_by_category()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(2));

        let svc = service(categories, items, ReferencePolicy::Cascade);
        let outcome = svc.delete_category(&id).await.unwrap();
        assert_eq!(outcome.items_deleted, 2);
    }

    #[tokio::test]
    async fn test_create_menu_item_requires_existing_category() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));

        let mut items = MockMenuItemRepository::new();
        items.expect_create().never();

        let svc = service(categories, items, ReferencePolicy::Orphan);
        let err = svc
            .create_menu_item(item_payload(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_menu_item_returns_populated_record() {
        let cat = category("Salads");
        let cat_id = cat.id;

        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .with(eq(cat_id))
            .returning(move |_| Ok(Some(cat.clone())));

        let mut items = MockMenuItemRepository::new();
        items.expect_create().times(1).returning(|i| Ok(i.clone()));

        let svc = service(categories, items, ReferencePolicy::Orphan);
        let created = svc.create_menu_item(item_payload(cat_id)).await.unwrap();
        assert_eq!(created.resolved_category_id(), Some(cat_id));
        assert_eq!(created.category_name(), "Salads");
        assert!(created.item.is_vegetarian);
    }

    #[tokio::test]
    async fn test_menu_item_without_category_fails_validation() {
        let svc = service(
            MockCategoryRepository::new(),
            MockMenuItemRepository::new(),
            ReferencePolicy::Orphan,
        );
        let payload = MenuItemPayload { category: None, ..item_payload(Uuid::new_v4()) };
        let err = svc.create_menu_item(payload).await.unwrap_err();
        assert!(err.to_string().contains("Please select a category"));
    }

    #[tokio::test]
    async fn test_update_missing_menu_item_is_not_found_before_category_check() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().never();

        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().times(1).returning(|_| Ok(None));
        items.expect_update().never();

        let svc = service(categories, items, ReferencePolicy::Orphan);
        let err = svc
            .update_menu_item(&Uuid::new_v4(), item_payload(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MenuItemNotFound));
    }

    #[tokio::test]
    async fn test_update_existing_menu_item_still_requires_category() {
        let cat = category("Soups");
        let existing = MenuItem::create(item_payload(cat.id)).unwrap();
        let id = existing.id;

        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));

        let mut items = MockMenuItemRepository::new();
        items
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(MenuItemWithCategory::new(existing.clone(), None))));
        items.expect_update().never();

        let svc = service(categories, items, ReferencePolicy::Orphan);
        let err = svc
            .update_menu_item(&id, item_payload(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_menu_item_is_not_found() {
        let mut items = MockMenuItemRepository::new();
        items.expect_delete().returning(|_| Ok(false));

        let svc = service(MockCategoryRepository::new(), items, ReferencePolicy::Orphan);
        let err = svc.delete_menu_item(&Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuItemNotFound));
    }

    #[tokio::test]
    async fn test_list_menu_items_passes_filter() {
        let filter = Uuid::new_v4();
        let mut items = MockMenuItemRepository::new();
        items
            .expect_list()
            .with(eq(Some(filter)))
            .times(1)
            .returning(|_| Ok(vec![]));

        let svc = service(MockCategoryRepository::new(), items, ReferencePolicy::Orphan);
        assert!(svc.list_menu_items(Some(filter)).await.unwrap().is_empty());
    }
}
