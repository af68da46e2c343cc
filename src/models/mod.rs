//! Data models
//!
//! Cocktails, ingredients, the calculator selection and favorites.

mod cocktail;
mod favorite;
mod ingredient;
mod selection;
mod totals;

pub use cocktail::{Category, Cocktail, CocktailSummary, NameSuggestion};
pub use favorite::Favorite;
pub use ingredient::{parse_leading_number, CatalogIngredient, PricedIngredient, RawIngredient, RawQuantity};
pub use selection::{SelectedRecipe, Selection};
pub use totals::{round_to, Totals};
