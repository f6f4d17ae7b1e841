// ============================================================================
// Resto Core - Shopping Cart
// File: crates/resto-core/src/domain/cart.rs
// Description: Session-local cart state and its shared handle
// ============================================================================
//! The cart lives only as long as the browsing session. One entry exists per
//! menu item id; adding an item that is already present bumps its quantity.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::menu_item::{MenuItem, MenuItemWithCategory};

/// Snapshot of the menu item fields the cart needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
        }
    }
}

impl From<&MenuItemWithCategory> for CartItem {
    fn from(item: &MenuItemWithCategory) -> Self {
        Self::from(&item.item)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub item: CartItem,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`. Quantities stop at `u32::MAX`.
    pub fn add(&mut self, item: CartItem) {
        match self.entries.iter_mut().find(|e| e.item.id == item.id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                debug!("Cart: {} quantity -> {}", entry.item.id, entry.quantity);
            }
            None => {
                debug!("Cart: added {}", item.id);
                self.entries.push(CartEntry { item, quantity: 1 });
            }
        }
    }

    /// Remove the entry for `id`; unknown ids are ignored.
    pub fn remove(&mut self, id: &Uuid) {
        self.entries.retain(|e| &e.item.id != id);
    }

    /// Replace the quantity of `id`. A quantity of zero removes the entry.
    pub fn set_quantity(&mut self, id: &Uuid, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.item.id == id) {
            entry.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Units across all entries, saturating at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |count, e| count.saturating_add(e.quantity))
    }

    pub fn get(&self, id: &Uuid) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.item.id == id)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cloneable handle to one session's cart, handed to every view that
/// reads or mutates it.
#[derive(Debug, Clone, Default)]
pub struct CartContext {
    inner: Arc<Mutex<Cart>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, item: impl Into<CartItem>) {
        self.inner.lock().add(item.into());
    }

    pub fn remove(&self, id: &Uuid) {
        self.inner.lock().remove(id);
    }

    pub fn set_quantity(&self, id: &Uuid, quantity: u32) {
        self.inner.lock().set_quantity(id, quantity);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn total(&self) -> f64 {
        self.inner.lock().total()
    }

    pub fn item_count(&self) -> u32 {
        self.inner.lock().item_count()
    }

    pub fn quantity_of(&self, id: &Uuid) -> u32 {
        self.inner.lock().get(id).map(|e| e.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the current entries, in insertion order.
    pub fn snapshot(&self) -> Vec<CartEntry> {
        self.inner.lock().entries().to_vec()
    }
}
