//! Cocktail suggestions for an event description.
//!
//! The text-completion service is reached through the [`SuggestionProvider`]
//! trait. Its reply must parse into a [`SuggestionResponse`]; anything else is
//! replaced by the rule-based generator in [`fallback`].

pub mod fallback;
mod openai;
mod scripted;

pub use fallback::RuleBasedProvider;
pub use openai::OpenAiProvider;
pub use scripted::ScriptedProvider;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;

/// Default model for the OpenAI provider
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Instructions sent with every suggestion request
pub const SYSTEM_PROMPT: &str = r#"Tu es un expert en cocktails.
Tu dois suggérer des cocktails adaptés aux préférences des utilisateurs.
Réponds au format JSON avec une liste de cocktails, ne donne que le noms des cocktails et le nombre de cocktail a préparer.
Exemple:
{
  "cocktails": [
    { "id": "mojito", "nom": "Mojito", "quantite": 10 },
    { "id": "moscow-mule", "nom": "Moscow Mule", "quantite": 5 },
    { "id": "gin-tonic", "nom": "Gin Tonic", "quantite": 5 }
  ],
  "message": "Une phrase pour présenter la sélection."
}"#;

/// Error type for suggestion requests.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Suggestion service not configured: {0}")]
    NotConfigured(String),

    #[error("A non-empty prompt is required")]
    InvalidPrompt,

    #[error("Suggestion request failed: {0}")]
    RequestFailed(String),

    #[error("Suggestion service returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed suggestion response: {0}")]
    MalformedResponse(String),
}

/// One suggested cocktail, in the service's wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailSuggestion {
    pub id: String,
    pub nom: String,
    pub quantite: u32,
}

impl CocktailSuggestion {
    pub fn new(id: impl Into<String>, nom: impl Into<String>, quantite: u32) -> Self {
        Self {
            id: id.into(),
            nom: nom.into(),
            quantite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub cocktails: Vec<CocktailSuggestion>,
    #[serde(default)]
    pub message: String,
}

/// A text-completion backend.
#[async_trait]
pub trait SuggestionProvider: Send + Sync + fmt::Debug {
    /// Send the system instructions and the user's event description, get the raw reply.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, SuggestError>;

    /// Provider name ("openai", "fallback", "scripted").
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

/// Build the provider named by the environment.
///
/// - SUGGESTION_PROVIDER: "openai" (default) | "fallback"
/// - SUGGESTION_MODEL: model name for OpenAI
/// - OPENAI_API_KEY: API key for OpenAI
pub fn create_provider_from_env() -> Result<Box<dyn SuggestionProvider>, SuggestError> {
    let provider = std::env::var("SUGGESTION_PROVIDER").unwrap_or_else(|_| "openai".to_string());

    match provider.as_str() {
        "fallback" => Ok(Box::new(RuleBasedProvider::new(Catalog::builtin()))),
        "openai" => {
            let api_key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| SuggestError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;
            let model =
                std::env::var("SUGGESTION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            Ok(Box::new(OpenAiProvider::new(api_key, model)))
        }
        other => Err(SuggestError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

/// Parse a provider reply into suggestions
pub fn parse_response(raw: &str) -> Result<SuggestionResponse, SuggestError> {
    serde_json::from_str(raw).map_err(|e| SuggestError::MalformedResponse(e.to_string()))
}

/// Ask the provider for cocktails matching an event description.
///
/// Configuration and transport failures are returned; a reply that is not the
/// expected JSON is replaced by the rule-based suggestions.
pub async fn suggest_cocktails(
    provider: Option<&dyn SuggestionProvider>,
    catalog: &Catalog,
    prompt: &str,
) -> Result<SuggestionResponse, SuggestError> {
    if prompt.trim().is_empty() {
        return Err(SuggestError::InvalidPrompt);
    }

    let provider = provider.ok_or_else(|| {
        SuggestError::NotConfigured("no suggestion provider available".to_string())
    })?;

    let parsed = match provider.complete(SYSTEM_PROMPT, prompt).await {
        Ok(raw) => parse_response(&raw),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(response) => {
            tracing::debug!(
                "{} ({}) suggested {} cocktails",
                provider.provider_name(),
                provider.model_name(),
                response.cocktails.len()
            );
            Ok(response)
        }
        Err(SuggestError::MalformedResponse(reason)) => {
            tracing::warn!(
                "Invalid reply from {}, using rule-based suggestions: {}",
                provider.provider_name(),
                reason
            );
            Ok(fallback::generate(catalog, prompt))
        }
        Err(e) => Err(e),
    }
}
