//! Catalog MCP Tools
//!
//! Browsing, search and autocomplete over the cocktail catalog.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Category, Cocktail, CocktailSummary, NameSuggestion};

/// Cocktail line for list/search results
#[derive(Debug, Serialize)]
pub struct CocktailCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alcohol_degree: f64,
    pub is_alcoholic: bool,
    pub categories: Vec<String>,
    pub ingredients: Vec<String>,
}

impl From<&Cocktail> for CocktailCard {
    fn from(c: &Cocktail) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            alcohol_degree: c.alcohol_degree,
            is_alcoholic: c.is_alcoholic,
            categories: c.categories.clone(),
            ingredients: c.ingredient_names().into_iter().map(String::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CocktailListResponse {
    pub cocktails: Vec<CocktailCard>,
    pub total: usize,
}

impl CocktailListResponse {
    fn from_cocktails(cocktails: &[&Cocktail], limit: usize) -> Self {
        let total = cocktails.len();
        Self {
            cocktails: cocktails.iter().take(limit).map(|c| CocktailCard::from(*c)).collect(),
            total,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryWithCount>,
}

#[derive(Debug, Serialize)]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub cocktail_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryCocktailsResponse {
    pub category: Option<Category>,
    #[serde(flatten)]
    pub list: CocktailListResponse,
}

#[derive(Debug, Serialize)]
pub struct NameSuggestionsResponse {
    pub query: String,
    pub suggestions: Vec<NameSuggestion>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedResponse {
    pub cocktails: Vec<CocktailSummary>,
}

pub fn list_categories(catalog: &Catalog) -> CategoryListResponse {
    CategoryListResponse {
        categories: catalog
            .categories()
            .iter()
            .map(|c| CategoryWithCount {
                category: c.clone(),
                cocktail_count: catalog.by_category(c.id).len(),
            })
            .collect(),
    }
}

pub fn get_cocktail(catalog: &Catalog, id: &str) -> Option<Cocktail> {
    catalog.get_by_id(id).cloned()
}

pub fn search_cocktails(catalog: &Catalog, query: &str, limit: usize) -> Result<CocktailListResponse, String> {
    if query.trim().is_empty() {
        return Err("Search query must not be empty".to_string());
    }
    let limit = limit.clamp(1, 100);
    Ok(CocktailListResponse::from_cocktails(&catalog.search(query.trim()), limit))
}

pub fn cocktails_by_category(catalog: &Catalog, category_id: &str, limit: usize) -> CategoryCocktailsResponse {
    let limit = limit.clamp(1, 100);
    CategoryCocktailsResponse {
        category: catalog.category(category_id).cloned(),
        list: CocktailListResponse::from_cocktails(&catalog.by_category(category_id), limit),
    }
}

pub fn cocktail_name_suggestions(catalog: &Catalog, query: &str, limit: usize) -> NameSuggestionsResponse {
    NameSuggestionsResponse {
        query: query.to_string(),
        suggestions: catalog.suggestions(query, limit.clamp(1, 20)),
    }
}

pub fn featured_cocktails(catalog: &Catalog) -> FeaturedResponse {
    FeaturedResponse {
        cocktails: catalog.featured(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_categories_counts() {
        let response = list_categories(Catalog::builtin());
        assert_eq!(response.categories.len(), 7);
        let soft = response
            .categories
            .iter()
            .find(|c| c.category.id == "sans-alcool")
            .unwrap();
        assert_eq!(soft.cocktail_count, 2);
    }

    #[test]
    fn test_search_limit_and_total() {
        let response = search_cocktails(Catalog::builtin(), "vodka", 2).unwrap();
        assert_eq!(response.cocktails.len(), 2);
        assert!(response.total > 2);
        assert!(search_cocktails(Catalog::builtin(), "  ", 10).is_err());
    }

    #[test]
    fn test_unknown_category_has_no_metadata() {
        let response = cocktails_by_category(Catalog::builtin(), "aperitif", 50);
        assert!(response.category.is_none());
        assert_eq!(response.list.total, 1);
    }

    #[test]
    fn test_card_lists_string_ingredients() {
        let card = CocktailCard::from(Catalog::builtin().get_by_id("aperol-spritz").unwrap());
        assert!(card.ingredients.iter().any(|i| i == "Rondelle d'orange"));
    }
}
