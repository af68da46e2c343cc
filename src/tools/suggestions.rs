//! Suggestion MCP Tools
//!
//! Event-based cocktail suggestions, optionally turned into a selection.

use serde::Serialize;

use super::cocktailatrice::SelectionResponse;
use crate::catalog::Catalog;
use crate::models::Selection;
use crate::suggest::{self, CocktailSuggestion, SuggestionProvider};

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub cocktails: Vec<CocktailSuggestion>,
    pub message: String,
    /// Present when the suggestions replaced the session selection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionResponse>,
}

/// Suggestions for an event, plus the selection they describe
///
/// The returned selection is built from the suggestions; the caller decides
/// whether to store it.
pub async fn suggest_cocktails(
    provider: Option<&dyn SuggestionProvider>,
    catalog: &Catalog,
    prompt: &str,
) -> Result<(SuggestResponse, Selection), String> {
    let response = suggest::suggest_cocktails(provider, catalog, prompt)
        .await
        .map_err(|e| e.to_string())?;

    let selection = Selection::from_suggestions(catalog, &response.cocktails);

    Ok((
        SuggestResponse {
            cocktails: response.cocktails,
            message: response.message,
            selection: None,
        },
        selection,
    ))
}
