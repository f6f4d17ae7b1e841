// ============================================================================
// Resto Core - Admin Console View
// File: crates/resto-core/src/views/admin_console.rs
// ============================================================================
//! Category and menu item listings with confirmed deletes.

use tracing::{info, warn};
use uuid::Uuid;

use crate::cancel::CancelSignal;
use crate::client::{ClientError, MenuApi};
use crate::domain::{Category, MenuItemWithCategory};

pub const DELETE_CATEGORY_PROMPT: &str =
    "Are you sure you want to delete this category? This action cannot be undone.";
pub const DELETE_MENU_ITEM_PROMPT: &str =
    "Are you sure you want to delete this menu item? This action cannot be undone.";

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Categories,
    MenuItems,
}

#[derive(Debug, Default)]
pub struct AdminConsole {
    tab: AdminTab,
    categories: Vec<Category>,
    menu_items: Vec<MenuItemWithCategory>,
    loading: bool,
    error: Option<String>,
}

impl AdminConsole {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// Fetch both lists concurrently; each result lands in its own list.
    pub async fn load(&mut self, api: &dyn MenuApi, cancel: &CancelSignal) {
        self.loading = true;

        let (categories, menu_items) = tokio::join!(
            cancel.guard(api.list_categories()),
            cancel.guard(api.list_menu_items(None)),
        );

        if cancel.is_cancelled() {
            return;
        }

        match categories {
            Ok(list) => self.categories = list,
            Err(e) => self.fail("Failed to fetch categories", e),
        }
        match menu_items {
            Ok(list) => self.menu_items = list,
            Err(e) => self.fail("Failed to fetch menu items", e),
        }
        self.loading = false;
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn menu_items(&self) -> &[MenuItemWithCategory] {
        &self.menu_items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Returns `Ok(false)` when the user declined; no request is sent then.
    pub async fn delete_category(
        &mut self,
        id: &Uuid,
        confirm: &dyn Confirm,
        api: &dyn MenuApi,
        cancel: &CancelSignal,
    ) -> Result<bool, ClientError> {
        if !confirm.confirm(DELETE_CATEGORY_PROMPT) {
            return Ok(false);
        }

        match cancel.guard(api.delete_category(id)).await {
            Ok(()) => {
                info!("Category {} deleted from admin console", id);
                self.categories.retain(|c| &c.id != id);
                Ok(true)
            }
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(e) => {
                self.fail("Failed to delete category", e.clone());
                Err(e)
            }
        }
    }

    pub async fn delete_menu_item(
        &mut self,
        id: &Uuid,
        confirm: &dyn Confirm,
        api: &dyn MenuApi,
        cancel: &CancelSignal,
    ) -> Result<bool, ClientError> {
        if !confirm.confirm(DELETE_MENU_ITEM_PROMPT) {
            return Ok(false);
        }

        match cancel.guard(api.delete_menu_item(id)).await {
            Ok(()) => {
                info!("Menu item {} deleted from admin console", id);
                self.menu_items.retain(|i| &i.item.id != id);
                Ok(true)
            }
            Err(ClientError::Cancelled) => Err(ClientError::Cancelled),
            Err(e) => {
                self.fail("Failed to delete menu item", e.clone());
                Err(e)
            }
        }
    }

    fn fail(&mut self, context: &str, error: ClientError) {
        warn!("{}: {}", context, error);
        let message = match error {
            ClientError::Api { message, .. } if !message.is_empty() => message,
            other => format!("{}: {}", context, other),
        };
        self.error = Some(message);
    }
}
