//! Application-wide constants

pub const DEFAULT_MENU_IMAGE: &str = "/images/default-food.png";
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

pub const CATEGORY_NAME_MAX: u64 = 50;
pub const CATEGORY_DESCRIPTION_MAX: u64 = 200;
pub const MENU_ITEM_NAME_MAX: u64 = 100;
pub const MENU_ITEM_DESCRIPTION_MAX: u64 = 500;

pub const INGREDIENT_SEPARATOR: char = ',';
pub const INGREDIENT_DISPLAY_SEPARATOR: &str = ", ";
