//! Favorites MCP Tools
//!
//! Star and unstar catalog cocktails.

use serde::Serialize;

use super::catalog::CocktailCard;
use crate::catalog::Catalog;
use crate::db::Database;
use crate::models::Favorite;

#[derive(Debug, Serialize)]
pub struct FavoriteChangeResponse {
    pub success: bool,
    pub cocktail_id: String,
    /// False when the call did not change anything
    pub changed: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteListResponse {
    pub cocktails: Vec<CocktailCard>,
    pub total: usize,
    /// Stored ids the catalog no longer knows
    pub missing_ids: Vec<String>,
}

pub fn add_favorite(db: &Database, catalog: &Catalog, cocktail_id: &str) -> Result<FavoriteChangeResponse, String> {
    let cocktail = catalog
        .get_by_id(cocktail_id)
        .ok_or_else(|| format!("Cocktail not found with id: {}", cocktail_id))?;

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let changed = Favorite::add(&conn, cocktail_id)
        .map_err(|e| format!("Failed to add favorite: {}", e))?;

    Ok(FavoriteChangeResponse {
        success: true,
        cocktail_id: cocktail_id.to_string(),
        changed,
        message: if changed {
            format!("{} ajouté aux favoris", cocktail.name)
        } else {
            format!("{} est déjà dans les favoris", cocktail.name)
        },
    })
}

pub fn remove_favorite(db: &Database, cocktail_id: &str) -> Result<FavoriteChangeResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let changed = Favorite::remove(&conn, cocktail_id)
        .map_err(|e| format!("Failed to remove favorite: {}", e))?;

    Ok(FavoriteChangeResponse {
        success: true,
        cocktail_id: cocktail_id.to_string(),
        changed,
        message: if changed {
            "Retiré des favoris".to_string()
        } else {
            "Ce cocktail n'était pas dans les favoris".to_string()
        },
    })
}

pub fn list_favorites(db: &Database, catalog: &Catalog) -> Result<FavoriteListResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;
    let ids = Favorite::list_ids(&conn).map_err(|e| format!("Failed to list favorites: {}", e))?;

    let cocktails: Vec<CocktailCard> = catalog
        .favorite_cocktails(ids.as_slice())
        .into_iter()
        .map(CocktailCard::from)
        .collect();
    let missing_ids = ids
        .into_iter()
        .filter(|id| catalog.get_by_id(id).is_none())
        .collect();

    Ok(FavoriteListResponse {
        total: cocktails.len(),
        cocktails,
        missing_ids,
    })
}
