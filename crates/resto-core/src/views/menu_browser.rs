// ============================================================================
// Resto Core - Menu Browser View
// File: crates/resto-core/src/views/menu_browser.rs
// ============================================================================
//! Public menu page: category filter, swipe/grid presentation and
//! "add to cart".

use tracing::{debug, warn};
use uuid::Uuid;

use crate::cancel::CancelSignal;
use crate::client::{ClientError, MenuApi};
use crate::domain::{CartContext, Category, MenuItemWithCategory};
use crate::views::ViewError;

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Swipe,
    #[default]
    Grid,
}

/// Items whose resolved category is `active`, or every item when no
/// category is active.
pub fn filter_by_category(
    items: &[MenuItemWithCategory],
    active: Option<Uuid>,
) -> Vec<&MenuItemWithCategory> {
    match active {
        Some(id) => items
            .iter()
            .filter(|item| item.resolved_category_id() == Some(id))
            .collect(),
        None => items.iter().collect(),
    }
}

pub struct MenuBrowser {
    state: BrowserState,
    categories: Vec<Category>,
    items: Vec<MenuItemWithCategory>,
    active_category: Option<Uuid>,
    view_mode: ViewMode,
    swipe_index: usize,
    cart: CartContext,
}

impl MenuBrowser {
    pub fn new(cart: CartContext) -> Self {
        Self {
            state: BrowserState::Loading,
            categories: Vec::new(),
            items: Vec::new(),
            active_category: None,
            view_mode: ViewMode::default(),
            swipe_index: 0,
            cart,
        }
    }

    /// Fetch categories then items. The first category becomes the active
    /// filter as soon as categories arrive, so a failed item fetch still
    /// leaves them in place. A cancelled load leaves the view untouched.
    pub async fn load(&mut self, api: &dyn MenuApi, cancel: &CancelSignal) -> Result<(), ClientError> {
        self.state = BrowserState::Loading;

        let mut categories = match cancel.guard(api.list_categories()).await {
            Ok(categories) => categories,
            Err(e) => return Err(self.fail(e)),
        };
        categories.sort_by_key(|c| c.order);

        let items = cancel.guard(api.list_menu_items(None)).await;
        if matches!(items, Err(ClientError::Cancelled)) {
            debug!("Menu load cancelled");
            return Err(ClientError::Cancelled);
        }

        self.active_category = categories.first().map(|c| c.id);
        self.categories = categories;

        match items {
            Ok(items) => {
                debug!("Menu loaded: {} categories, {} items", self.categories.len(), items.len());
                self.items = items;
                self.swipe_index = 0;
                self.state = BrowserState::Ready;
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        match err {
            ClientError::Cancelled => debug!("Menu load cancelled"),
            ref e => {
                warn!("Menu load failed: {}", e);
                self.state = BrowserState::Error(e.to_string());
            }
        }
        err
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category(&self) -> Option<Uuid> {
        self.active_category
    }

    pub fn select_category(&mut self, category: Option<Uuid>) {
        self.active_category = category;
        self.swipe_index = 0;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn visible_items(&self) -> Vec<&MenuItemWithCategory> {
        filter_by_category(&self.items, self.active_category)
    }

    pub fn swipe_index(&self) -> usize {
        self.swipe_index
    }

    pub fn current_swipe_item(&self) -> Option<&MenuItemWithCategory> {
        self.visible_items().get(self.swipe_index).copied()
    }

    pub fn swipe_next(&mut self) {
        let len = self.visible_items().len();
        if len > 0 {
            self.swipe_index = (self.swipe_index + 1) % len;
        }
    }

    pub fn swipe_previous(&mut self) {
        let len = self.visible_items().len();
        if len > 0 {
            self.swipe_index = (self.swipe_index + len - 1) % len;
        }
    }

    /// Put one unit of a loaded item into the cart.
    pub fn add_to_cart(&self, item_id: &Uuid) -> Result<(), ViewError> {
        let item = self
            .items
            .iter()
            .find(|i| &i.item.id == item_id)
            .ok_or(ViewError::ItemNotFound(*item_id))?;

        if !item.item.available {
            return Err(ViewError::ItemUnavailable(item.item.name.clone()));
        }

        self.cart.add(item);
        Ok(())
    }

    pub fn cart(&self) -> &CartContext {
        &self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::ViewLifetime;
    use crate::views::test_support::{category, item, StubMenuApi};
    use std::time::Duration;

    fn menu() -> (Vec<Category>, Vec<MenuItemWithCategory>) {
        let drinks = category("Drinks", 2);
        let mains = category("Mains", 1);
        let items = vec![
            item("Nasi Goreng", 25000.0, Some(&mains), true),
            item("Es Jeruk", 8000.0, Some(&drinks), true),
            item("Mie Ayam", 20000.0, Some(&mains), false),
            item("Orphan Dish", 10000.0, None, true),
        ];
        (vec![drinks, mains], items)
    }

    #[test]
    fn test_filter_by_category() {
        let (categories, items) = menu();
        let drinks = categories[0].id;

        let filtered = filter_by_category(&items, Some(drinks));
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|i| i.resolved_category_id() == Some(drinks)));

        assert_eq!(filter_by_category(&items, None).len(), items.len());
        assert!(filter_by_category(&items, Some(Uuid::new_v4())).is_empty());
    }

    #[tokio::test]
    async fn test_load_selects_first_category_by_order() {
        let (categories, items) = menu();
        let mains = categories[1].id;
        let api = StubMenuApi::with_menu(categories, items);

        let mut browser = MenuBrowser::new(CartContext::new());
        assert_eq!(browser.state(), &BrowserState::Loading);

        browser.load(&api, &CancelSignal::never()).await.unwrap();
        assert_eq!(browser.state(), &BrowserState::Ready);
        assert_eq!(browser.categories()[0].name, "Mains");
        assert_eq!(browser.active_category(), Some(mains));
        assert_eq!(browser.visible_items().len(), 2);

        browser.select_category(None);
        assert_eq!(browser.visible_items().len(), 4);
    }

    #[tokio::test]
    async fn test_load_error_sets_banner() {
        let api = StubMenuApi::default();
        *api.fail_items.lock() = Some(ClientError::Transport("connection refused".to_string()));

        let mut browser = MenuBrowser::new(CartContext::new());
        assert!(browser.load(&api, &CancelSignal::never()).await.is_err());
        assert!(matches!(browser.state(), BrowserState::Error(msg) if msg.contains("connection refused")));
    }

    #[tokio::test]
    async fn test_failed_item_fetch_keeps_categories() {
        let (categories, items) = menu();
        let mains = categories[1].id;
        let api = StubMenuApi::with_menu(categories, items);
        *api.fail_items.lock() = Some(ClientError::Api {
            status: 500,
            message: "Failed to fetch menu items".to_string(),
        });

        let mut browser = MenuBrowser::new(CartContext::new());
        assert!(browser.load(&api, &CancelSignal::never()).await.is_err());
        assert!(matches!(browser.state(), BrowserState::Error(msg) if msg == "Failed to fetch menu items"));
        assert_eq!(browser.categories().len(), 2);
        assert_eq!(browser.active_category(), Some(mains));
        assert!(browser.visible_items().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_load_does_not_apply_results() {
        let (categories, items) = menu();
        let api = StubMenuApi::with_menu(categories, items);
        *api.delay.lock() = Some(Duration::from_millis(50));

        let lifetime = ViewLifetime::new();
        let signal = lifetime.signal();
        let mut browser = MenuBrowser::new(CartContext::new());

        let cancel_soon = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            lifetime.cancel();
        };
        let (result, _) = tokio::join!(browser.load(&api, &signal), cancel_soon);

        assert_eq!(result, Err(ClientError::Cancelled));
        assert_eq!(browser.state(), &BrowserState::Loading);
        assert!(browser.categories().is_empty());
        assert!(browser.visible_items().is_empty());
    }

    #[tokio::test]
    async fn test_add_to_cart_delegates_to_cart() {
        let (categories, items) = menu();
        let nasi = items[0].id();
        let mie = items[2].id();
        let api = StubMenuApi::with_menu(categories, items);

        let cart = CartContext::new();
        let mut browser = MenuBrowser::new(cart.clone());
        browser.load(&api, &CancelSignal::never()).await.unwrap();

        browser.add_to_cart(&nasi).unwrap();
        browser.add_to_cart(&nasi).unwrap();
        assert_eq!(cart.quantity_of(&nasi), 2);
        assert_eq!(cart.total(), 50000.0);

        assert!(matches!(browser.add_to_cart(&mie), Err(ViewError::ItemUnavailable(_))));
        assert!(matches!(
            browser.add_to_cart(&Uuid::new_v4()),
            Err(ViewError::ItemNotFound(_))
        ));
        assert_eq!(cart.item_count(), 2);
    }

    #[tokio::test]
    async fn test_swipe_cycles_through_visible_items() {
        let (categories, items) = menu();
        let api = StubMenuApi::with_menu(categories, items);
        let mut browser = MenuBrowser::new(CartContext::new());
        browser.load(&api, &CancelSignal::never()).await.unwrap();
        browser.set_view_mode(ViewMode::Swipe);
        assert_eq!(browser.view_mode(), ViewMode::Swipe);

        // Mains has two items
        let first = browser.current_swipe_item().unwrap().id();
        browser.swipe_next();
        assert_eq!(browser.swipe_index(), 1);
        browser.swipe_next();
        assert_eq!(browser.current_swipe_item().unwrap().id(), first);
        browser.swipe_previous();
        assert_eq!(browser.swipe_index(), 1);

        browser.select_category(Some(Uuid::new_v4()));
        browser.swipe_next();
        assert_eq!(browser.swipe_index(), 0);
        assert!(browser.current_swipe_item().is_none());
    }
}
