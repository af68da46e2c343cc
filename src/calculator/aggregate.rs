//! Per-recipe and grand totals for a selection.

use serde::Serialize;

use crate::models::{round_to, PricedIngredient, SelectedRecipe};
use crate::pricing::cl_per_unit;

/// Computed figures for one selected recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeResult {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// Ingredients with quantities for the whole batch
    pub ingredients: Vec<PricedIngredient>,
    /// Centiliters, 1 decimal
    pub total_volume: f64,
    pub total_price: f64,
    pub total_calories: f64,
    pub price_per_cocktail: f64,
    pub calories_per_cocktail: f64,
    pub alcoholic_percentage: f64,
    pub formatted_price_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub results: Vec<RecipeResult>,
    pub total_cost: f64,
    pub total_calories: f64,
}

impl AggregateResult {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total_cost: 0.0,
            total_calories: 0.0,
        }
    }
}

/// "{low}-{high}€" band of one euro around a unit price
pub fn format_price_range(price: f64) -> String {
    let rounded = price.round();
    format!("{:.0}-{:.0}€", (rounded - 1.0).max(0.0), rounded + 1.0)
}

/// Unrounded figures for one recipe
struct RawFigures {
    volume: f64,
    alcohol_volume: f64,
    price: f64,
    calories: f64,
}

fn raw_figures(recipe: &SelectedRecipe) -> RawFigures {
    let q = f64::from(recipe.quantity);

    recipe.ingredients.iter().fold(
        RawFigures {
            volume: 0.0,
            alcohol_volume: 0.0,
            price: 0.0,
            calories: 0.0,
        },
        |mut acc, ing| {
            let factor = cl_per_unit(&ing.unit);
            let volume = ing.quantity * factor * q;

            acc.volume += volume;
            if ing.is_alcoholic && factor > 0.0 {
                acc.alcohol_volume += volume;
            }
            acc.price += ing.cost() * q;
            acc.calories += ing.calories * q;
            acc
        },
    )
}

/// Figures for one recipe. Stored running totals are ignored.
pub fn recipe_result(recipe: &SelectedRecipe) -> RecipeResult {
    figured_result(recipe).1
}

/// Unrounded figures alongside the rounded result, from one pass over the ingredients
fn figured_result(recipe: &SelectedRecipe) -> (RawFigures, RecipeResult) {
    let figures = raw_figures(recipe);
    let q = f64::from(recipe.quantity.max(1));

    let alcoholic_percentage = if figures.volume > 0.0 {
        (figures.alcohol_volume / figures.volume * 100.0).round()
    } else {
        0.0
    };

    let result = RecipeResult {
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        quantity: recipe.quantity,
        ingredients: recipe
            .ingredients
            .iter()
            .map(|ing| ing.scaled(f64::from(recipe.quantity)))
            .collect(),
        total_volume: round_to(figures.volume, 1),
        total_price: round_to(figures.price, 2),
        total_calories: figures.calories.round(),
        price_per_cocktail: round_to(figures.price / q, 2),
        calories_per_cocktail: (figures.calories / q).round(),
        alcoholic_percentage,
        formatted_price_range: format_price_range(figures.price / q),
    };
    (figures, result)
}

/// Results for every selected recipe plus grand totals
///
/// Grand totals accumulate unrounded per-recipe figures and are rounded once.
pub fn aggregate(selection: &[SelectedRecipe]) -> AggregateResult {
    if selection.is_empty() {
        return AggregateResult::empty();
    }

    let mut total_cost = 0.0;
    let mut total_calories = 0.0;
    let mut results = Vec::with_capacity(selection.len());

    for recipe in selection {
        let (figures, result) = figured_result(recipe);
        total_cost += figures.price;
        total_calories += figures.calories;
        results.push(result);
    }

    tracing::debug!(
        "Aggregated {} recipes: {:.2} EUR, {:.0} kcal",
        results.len(),
        total_cost,
        total_calories
    );

    AggregateResult {
        results,
        total_cost: round_to(total_cost, 2),
        total_calories: total_calories.round(),
    }
}
