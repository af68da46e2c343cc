//! Galactic Cocktails MCP Server Implementation
//!
//! Implements the MCP server with the catalog, favorites, calculator and
//! suggestion tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::{Catalog, DEFAULT_SUGGESTION_LIMIT};
use crate::db::Database;
use crate::models::{Favorite, Selection};
use crate::suggest::SuggestionProvider;
use crate::tools::cocktailatrice::{self, SelectionResponse};
use crate::tools::status::StatusTracker;
use crate::tools::{catalog as catalog_tools, favorites, suggestions};

/// Galactic Cocktails MCP Service
#[derive(Clone)]
pub struct GalacticService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    catalog: &'static Catalog,
    provider: Option<Arc<dyn SuggestionProvider>>,
    tool_router: ToolRouter<GalacticService>,
    /// Calculator selection for this session, replaced wholesale on every change
    selection: Arc<std::sync::Mutex<Selection>>,
}

impl GalacticService {
    pub fn new(
        database_path: PathBuf,
        database: Database,
        provider: Option<Arc<dyn SuggestionProvider>>,
    ) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            database,
            catalog: Catalog::builtin(),
            provider,
            tool_router: Self::tool_router(),
            selection: Arc::new(std::sync::Mutex::new(Selection::new())),
        }
    }

    fn current_selection(&self) -> Result<Selection, McpError> {
        self.selection
            .lock()
            .map(|s| s.clone())
            .map_err(|_| McpError::internal_error("Selection lock poisoned", None))
    }

    /// Replace the session selection with `f(current)` and return the new view
    fn update_selection<F>(&self, f: F) -> Result<CallToolResult, McpError>
    where
        F: FnOnce(&Selection) -> Result<Selection, String>,
    {
        let mut guard = self
            .selection
            .lock()
            .map_err(|_| McpError::internal_error("Selection lock poisoned", None))?;
        let next = f(&guard).map_err(|e| McpError::invalid_params(e, None))?;
        *guard = next;
        json_result(&SelectionResponse::from(&*guard))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Catalog Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCocktailParams {
    /// Cocktail id (e.g. "mojito")
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchCocktailsParams {
    /// Text matched against names, ingredients, descriptions, tags and categories
    pub query: String,
    /// Maximum results (default 20, max 100)
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CocktailsByCategoryParams {
    /// Category id: rhum, vodka, gin, tequila, whisky, sans-alcool or classiques
    pub category_id: String,
    /// Maximum results (default 20, max 100)
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NameSuggestionsParams {
    /// Start of a cocktail name (at least 2 characters)
    pub query: String,
    /// Maximum suggestions (default 5, max 20)
    #[serde(default = "default_suggestion_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize { 20 }
fn default_suggestion_limit() -> usize { DEFAULT_SUGGESTION_LIMIT }

// ============================================================================
// Favorite Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FavoriteParams {
    /// Cocktail id
    pub cocktail_id: String,
}

// ============================================================================
// Cocktailatrice Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PriceIngredientParams {
    /// Ingredient name, e.g. "Rhum blanc"
    pub name: String,
    /// Quantity as written in a recipe ("5", "1.5"); omitted means 10
    pub quantity: Option<String>,
    /// Unit: ml, cl, oz, dash, trait, cuillère à café, pièce, feuilles, ...
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddToSelectionParams {
    /// Cocktail id
    pub cocktail_id: String,
    /// Number of servings to add (default 1)
    #[serde(default = "default_servings")]
    pub quantity: u32,
}

fn default_servings() -> u32 { 1 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectionEntryParams {
    /// Id of a cocktail in the selection
    pub cocktail_id: String,
}

// ============================================================================
// Suggestion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestCocktailsParams {
    /// Event description: type of party, number of guests, mood, preferred spirit, budget
    pub prompt: String,
    /// Replace the current selection with the suggestions (default false)
    #[serde(default)]
    pub apply: bool,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl GalacticService {
    // --- Status ---

    #[tool(description = "Get the current status of the Galactic Cocktails service including build info, embedded data, database and suggestion provider")]
    async fn status(&self) -> Result<CallToolResult, McpError> {
        let favorites = self
            .database
            .with_conn(Favorite::list_ids)
            .ok()
            .map(|ids| ids.len());
        let provider = self
            .provider
            .as_ref()
            .map(|p| format!("{} ({})", p.provider_name(), p.model_name()));

        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status(favorites, provider))
    }

    #[tool(description = "Get instructions for the cocktailatrice cost and calorie calculator. Call this before building a selection.")]
    fn cocktailatrice_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            cocktailatrice::CALCULATOR_INSTRUCTIONS,
        )]))
    }

    // --- Catalog ---

    #[tool(description = "List the cocktail categories with their descriptions and cocktail counts")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&catalog_tools::list_categories(self.catalog))
    }

    #[tool(description = "Get a cocktail with ingredients, instructions and details")]
    fn get_cocktail(&self, Parameters(p): Parameters<GetCocktailParams>) -> Result<CallToolResult, McpError> {
        match catalog_tools::get_cocktail(self.catalog, &p.id) {
            Some(cocktail) => json_result(&cocktail),
            None => Ok(CallToolResult::success(vec![Content::text(
                serde_json::json!({"error": "Cocktail not found", "id": p.id}).to_string(),
            )])),
        }
    }

    #[tool(description = "Search cocktails by name, ingredient, description, tag or category (case-insensitive)")]
    fn search_cocktails(&self, Parameters(p): Parameters<SearchCocktailsParams>) -> Result<CallToolResult, McpError> {
        let result = catalog_tools::search_cocktails(self.catalog, &p.query, p.limit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List the cocktails of a category (rhum, vodka, gin, tequila, whisky, sans-alcool, classiques)")]
    fn cocktails_by_category(&self, Parameters(p): Parameters<CocktailsByCategoryParams>) -> Result<CallToolResult, McpError> {
        json_result(&catalog_tools::cocktails_by_category(self.catalog, &p.category_id, p.limit))
    }

    #[tool(description = "Autocomplete cocktail names: names starting with the query first, then names containing it")]
    fn cocktail_name_suggestions(&self, Parameters(p): Parameters<NameSuggestionsParams>) -> Result<CallToolResult, McpError> {
        json_result(&catalog_tools::cocktail_name_suggestions(self.catalog, &p.query, p.limit))
    }

    #[tool(description = "Get the featured cocktails")]
    fn featured_cocktails(&self) -> Result<CallToolResult, McpError> {
        json_result(&catalog_tools::featured_cocktails(self.catalog))
    }

    // --- Favorites ---

    #[tool(description = "Add a cocktail to the favorites")]
    fn add_favorite(&self, Parameters(p): Parameters<FavoriteParams>) -> Result<CallToolResult, McpError> {
        let result = favorites::add_favorite(&self.database, self.catalog, &p.cocktail_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove a cocktail from the favorites")]
    fn remove_favorite(&self, Parameters(p): Parameters<FavoriteParams>) -> Result<CallToolResult, McpError> {
        let result = favorites::remove_favorite(&self.database, &p.cocktail_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List favorite cocktails, oldest first")]
    fn list_favorites(&self) -> Result<CallToolResult, McpError> {
        let result = favorites::list_favorites(&self.database, self.catalog)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Cocktailatrice ---

    #[tool(description = "Estimate price (EUR per 10 ml), calories and alcohol flag for one ingredient, and show which price rule matched")]
    fn price_ingredient(&self, Parameters(p): Parameters<PriceIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = cocktailatrice::price_ingredient(&p.name, p.quantity, p.unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Add servings of a cocktail to the selection. Adding a selected cocktail increases its servings.")]
    fn add_to_selection(&self, Parameters(p): Parameters<AddToSelectionParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog;
        self.update_selection(|s| cocktailatrice::add_to_selection(s, catalog, &p.cocktail_id, p.quantity))
    }

    #[tool(description = "Add one serving of a selected cocktail")]
    fn increase_quantity(&self, Parameters(p): Parameters<SelectionEntryParams>) -> Result<CallToolResult, McpError> {
        self.update_selection(|s| cocktailatrice::increase_quantity(s, &p.cocktail_id))
    }

    #[tool(description = "Remove one serving of a selected cocktail. At one serving the cocktail leaves the selection.")]
    fn decrease_quantity(&self, Parameters(p): Parameters<SelectionEntryParams>) -> Result<CallToolResult, McpError> {
        self.update_selection(|s| cocktailatrice::decrease_quantity(s, &p.cocktail_id))
    }

    #[tool(description = "Remove a cocktail from the selection")]
    fn remove_from_selection(&self, Parameters(p): Parameters<SelectionEntryParams>) -> Result<CallToolResult, McpError> {
        self.update_selection(|s| cocktailatrice::remove_from_selection(s, &p.cocktail_id))
    }

    #[tool(description = "Empty the selection")]
    fn clear_selection(&self) -> Result<CallToolResult, McpError> {
        self.update_selection(|s| Ok(s.cleared()))
    }

    #[tool(description = "Show the current selection with running totals")]
    fn get_selection(&self) -> Result<CallToolResult, McpError> {
        json_result(&SelectionResponse::from(&self.current_selection()?))
    }

    #[tool(description = "Calculate per-cocktail volume, price, price band, calories and alcohol share, grand totals, and the merged ingredient list")]
    fn calculate_selection(&self) -> Result<CallToolResult, McpError> {
        json_result(&cocktailatrice::calculate_selection(&self.current_selection()?))
    }

    #[tool(description = "Render the shopping list for the selection as plain text grouped by aisle, with its download filename")]
    fn export_shopping_list(&self) -> Result<CallToolResult, McpError> {
        json_result(&cocktailatrice::export_shopping_list(&self.current_selection()?))
    }

    // --- Suggestions ---

    #[tool(description = "Suggest cocktails and servings for an event description. With apply=true the suggestions replace the current selection.")]
    async fn suggest_cocktails(&self, Parameters(p): Parameters<SuggestCocktailsParams>) -> Result<CallToolResult, McpError> {
        let (mut response, selection) =
            suggestions::suggest_cocktails(self.provider.as_deref(), self.catalog, &p.prompt)
                .await
                .map_err(|e| McpError::internal_error(e, None))?;

        if p.apply {
            response.selection = Some(SelectionResponse::from(&selection));
            self.update_selection(|_| Ok(selection))?;
        }

        json_result(&response)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for GalacticService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "galactic-cocktails".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Galactic Cocktails".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Galactic Cocktails - cocktail catalog and the cocktailatrice cost/calorie calculator. \
                 Call cocktailatrice_instructions before using the calculator. \
                 Catalog: list_categories, get_cocktail, search_cocktails, cocktails_by_category, \
                 cocktail_name_suggestions, featured_cocktails. \
                 Favorites: add_favorite, remove_favorite, list_favorites. \
                 Calculator: price_ingredient, add_to_selection, increase_quantity, decrease_quantity, \
                 remove_from_selection, clear_selection, get_selection, calculate_selection, export_shopping_list. \
                 Suggestions: suggest_cocktails (apply=true fills the selection)."
                    .into(),
            ),
        }
    }
}
