//! Cocktail selection
//!
//! The list of recipes chosen in the calculator, each with a serving count.
//! Every operation returns a new `Selection`; the stored ingredients are
//! never modified, so totals can always be rebuilt from them.

use serde::{Deserialize, Serialize};

use super::{PricedIngredient, Totals};
use crate::catalog::Catalog;
use crate::pricing::normalize_all;
use crate::suggest::CocktailSuggestion;

/// A recipe in the selection, with running totals for all its servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedRecipe {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub ingredients: Vec<PricedIngredient>,
    pub total_price: f64,
    pub total_calories: f64,
}

impl SelectedRecipe {
    /// Create an entry; quantities below 1 are raised to 1
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ingredients: Vec<PricedIngredient>,
        quantity: u32,
    ) -> Self {
        let mut recipe = Self {
            id: id.into(),
            name: name.into(),
            quantity: quantity.max(1),
            ingredients,
            total_price: 0.0,
            total_calories: 0.0,
        };
        recipe.set_totals(recipe.unit_totals() * f64::from(recipe.quantity));
        recipe
    }

    /// Cost and calories of a single cocktail
    pub fn unit_totals(&self) -> Totals {
        self.ingredients
            .iter()
            .map(|ing| Totals {
                price: ing.cost(),
                calories: ing.calories,
            })
            .sum()
    }

    /// Running totals for all servings
    pub fn totals(&self) -> Totals {
        Totals {
            price: self.total_price,
            calories: self.total_calories,
        }
    }

    /// Copy with totals rebuilt from the ingredients
    pub fn recomputed(&self) -> Self {
        let mut recipe = self.clone();
        recipe.set_totals(self.unit_totals() * f64::from(self.quantity));
        recipe
    }

    fn set_totals(&mut self, totals: Totals) {
        self.total_price = totals.price;
        self.total_calories = totals.calories;
    }

    /// None when the serving count would overflow
    fn grown_by(&self, servings: u32) -> Option<Self> {
        let mut recipe = self.clone();
        recipe.quantity = self.quantity.checked_add(servings)?;
        recipe.set_totals(self.totals() + self.unit_totals() * f64::from(servings));
        Some(recipe)
    }

    /// Grow up to `u32::MAX` servings; totals follow the servings actually added
    fn grown_saturating(&self, servings: u32) -> Self {
        let headroom = u32::MAX - self.quantity;
        self.grown_by(servings.min(headroom)).unwrap_or_else(|| self.clone())
    }

    fn shrunk_by_one(&self) -> Self {
        let mut recipe = self.clone();
        recipe.quantity -= 1;
        recipe.set_totals(self.totals() - self.unit_totals());
        recipe
    }
}

/// Ordered list of selected recipes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    recipes: Vec<SelectedRecipe>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_recipes(recipes: Vec<SelectedRecipe>) -> Self {
        Self { recipes }
    }

    pub fn recipes(&self) -> &[SelectedRecipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&SelectedRecipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Add servings of a recipe. An already selected recipe grows in place
    /// (keeping its ingredients); otherwise a new entry is appended.
    ///
    /// Serving counts stop at `u32::MAX`; use [`Selection::try_added`] to
    /// reject the overflow instead.
    pub fn with_added(
        &self,
        id: &str,
        name: &str,
        ingredients: Vec<PricedIngredient>,
        quantity: u32,
    ) -> Self {
        self.added_by(id, name, ingredients, quantity, |r, q| Some(r.grown_saturating(q)))
            .unwrap_or_else(|| self.clone())
    }

    /// Like [`Selection::with_added`], but None if the serving count would overflow
    pub fn try_added(
        &self,
        id: &str,
        name: &str,
        ingredients: Vec<PricedIngredient>,
        quantity: u32,
    ) -> Option<Self> {
        self.added_by(id, name, ingredients, quantity, SelectedRecipe::grown_by)
    }

    /// One more serving of a selected recipe, stopping at `u32::MAX`
    pub fn with_increased(&self, id: &str) -> Self {
        self.map_recipe(id, |r| Some(r.grown_saturating(1)))
    }

    /// One more serving, or None if the serving count would overflow
    pub fn try_increased(&self, id: &str) -> Option<Self> {
        match self.get(id) {
            Some(r) if r.quantity == u32::MAX => None,
            _ => Some(self.with_increased(id)),
        }
    }

    /// One fewer serving; the recipe leaves the selection instead of reaching zero
    pub fn with_decreased(&self, id: &str) -> Self {
        self.map_recipe(id, |r| (r.quantity > 1).then(|| r.shrunk_by_one()))
    }

    /// Drop a recipe from the selection
    pub fn without(&self, id: &str) -> Self {
        self.map_recipe(id, |_| None)
    }

    pub fn cleared(&self) -> Self {
        Self::new()
    }

    /// Copy with every recipe's totals rebuilt from its ingredients
    pub fn recomputed(&self) -> Self {
        Self {
            recipes: self.recipes.iter().map(SelectedRecipe::recomputed).collect(),
        }
    }

    /// Build a selection from cocktail suggestions
    ///
    /// Ids the catalog does not know give an entry without ingredients.
    pub fn from_suggestions(catalog: &Catalog, suggestions: &[CocktailSuggestion]) -> Self {
        suggestions.iter().fold(Self::new(), |selection, s| {
            let ingredients = catalog
                .get_by_id(&s.id)
                .map(|c| normalize_all(&c.ingredients))
                .unwrap_or_default();
            selection.with_added(&s.id, &s.nom, ingredients, s.quantite)
        })
    }

    fn added_by<F>(
        &self,
        id: &str,
        name: &str,
        ingredients: Vec<PricedIngredient>,
        quantity: u32,
        grow: F,
    ) -> Option<Self>
    where
        F: Fn(&SelectedRecipe, u32) -> Option<SelectedRecipe>,
    {
        let quantity = quantity.max(1);
        let mut recipes = self.recipes.clone();

        match recipes.iter().position(|r| r.id == id) {
            Some(i) => recipes[i] = grow(&recipes[i], quantity)?,
            None => recipes.push(SelectedRecipe::new(id, name, ingredients, quantity)),
        }

        Some(Self { recipes })
    }

    fn map_recipe<F>(&self, id: &str, f: F) -> Self
    where
        F: Fn(&SelectedRecipe) -> Option<SelectedRecipe>,
    {
        let recipes = self
            .recipes
            .iter()
            .filter_map(|r| if r.id == id { f(r) } else { Some(r.clone()) })
            .collect();
        Self { recipes }
    }
}
