//! # Resto Core - Domain Module
//! 
//! Menu entities, request payloads and the shopping cart.

pub mod category;
pub mod menu_item;
pub mod payload;
pub mod cart;

// Re-export all entities
pub use category::Category;
pub use menu_item::{MenuItem, MenuItemWithCategory, NutritionalInfo};
pub use payload::{CategoryPayload, MenuItemPayload};
pub use cart::{Cart, CartContext, CartEntry, CartItem};
