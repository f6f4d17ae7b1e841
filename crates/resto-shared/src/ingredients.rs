//! Ingredient list helpers
//!
//! Ingredients are stored as a list, shown joined with `", "` and edited as a
//! single comma-separated string.

use crate::constants::{INGREDIENT_DISPLAY_SEPARATOR, INGREDIENT_SEPARATOR};

/// Split a comma-separated input into trimmed, non-empty ingredient names.
pub fn split_ingredients(input: &str) -> Vec<String> {
    input
        .split(INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_ingredients<S: AsRef<str>>(ingredients: &[S]) -> String {
    ingredients
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(INGREDIENT_DISPLAY_SEPARATOR)
}
