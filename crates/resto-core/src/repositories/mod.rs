//! Repository traits (ports)

pub mod category_repository;
pub mod menu_item_repository;

pub use category_repository::CategoryRepository;
pub use menu_item_repository::MenuItemRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
