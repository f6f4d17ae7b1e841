//! Headless view-models.
//!
//! Each view keeps the state a renderer needs and talks to the menu API only
//! through [`MenuApi`](crate::client::MenuApi) under a
//! [`CancelSignal`](crate::cancel::CancelSignal).

pub mod menu_browser;
pub mod checkout;
pub mod admin_console;
pub mod forms;

#[cfg(test)]
pub(crate) mod test_support;

pub use menu_browser::{filter_by_category, BrowserState, MenuBrowser, ViewMode};
pub use checkout::{CheckoutLine, CheckoutSummary, DeliveryForm};
pub use admin_console::{AdminConsole, AdminTab, Confirm};
pub use forms::{CategoryForm, FormMode, MenuItemForm};

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("{0} is currently unavailable")]
    ItemUnavailable(String),
}
