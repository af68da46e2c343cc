//! Selection calculator
//!
//! Per-recipe totals, the merged ingredient summary and the shopping-list export.

pub mod aggregate;
pub mod export;
pub mod summary;

pub use aggregate::{aggregate, format_price_range, recipe_result, AggregateResult, RecipeResult};
pub use export::{export_list, ShoppingCategory, EMPTY_LIST_PLACEHOLDER, SHOPPING_LIST_FILENAME};
pub use summary::{summarize, IngredientSummaryEntry};
