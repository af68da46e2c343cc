//! Ingredient pricing module
//!
//! Unit tables, price and calorie resolution, and ingredient normalization.

pub mod calories;
pub mod normalizer;
pub mod price;
pub mod price_table;
pub mod units;

pub use calories::{calories_per_cl, resolve_calories};
pub use normalizer::{is_alcoholic, normalize, normalize_all, normalize_with, DEFAULT_QUANTITY};
pub use price::{
    normalize_name, resolve_price, PriceCategory, PriceMatch, PriceResolver, PriceSource,
    DEFAULT_PRICE_PER_10ML,
};
pub use price_table::{reference_prices, ReferencePriceEntry};
pub use units::{cl_per_unit, ml_for_ordering, ml_per_unit, to_cl, to_display, DisplayQuantity};
