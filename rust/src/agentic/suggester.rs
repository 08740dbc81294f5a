//! Icon Suggester
//!
//! Main entry point for icon suggestion. Tries each configured LLM
//! provider in order, validates whatever comes back against the catalog,
//! and falls back to the deterministic keyword scorer when no provider
//! produces a usable answer.
//!
//! The fallback is unconditional and silent: a response is always either
//! entirely provider-sourced or entirely scorer-sourced, never a mix, and
//! provider failures never reach the caller.

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::assets;
use crate::catalog::IconCatalog;
use crate::error::SuggestError;
use crate::scorer::{self, MAX_SUGGESTIONS};
use crate::suggestion::Suggestion;

use super::backend::SuggestBackend;
use super::llm_client::{LlmClient, ProviderError};
use super::ollama_client::OllamaClient;
use super::openai_client::OpenAiClient;
use super::prompt::build_suggestion_prompt;

/// Suggestion orchestrator
pub struct IconSuggester {
    catalog: Arc<IconCatalog>,
    clients: Vec<Box<dyn LlmClient>>,
}

/// Loosely-typed suggestion record as returned by a provider. Anything
/// beyond these fields is ignored; URLs in particular are never read
/// from provider output.
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    name: String,
    library: String,
    #[serde(default)]
    description: Option<String>,
}

impl IconSuggester {
    /// Create a suggester with an explicit provider chain. An empty chain
    /// is valid: every request then goes straight to the scorer.
    pub fn new(catalog: Arc<IconCatalog>, clients: Vec<Box<dyn LlmClient>>) -> Self {
        Self { catalog, clients }
    }

    /// Create from environment variables.
    ///
    /// With `SUGGEST_BACKEND` unset the chain is Ollama then OpenAI;
    /// setting it restricts the chain to one backend. A backend whose
    /// credentials are missing is skipped rather than treated as fatal.
    pub fn from_env(catalog: Arc<IconCatalog>) -> Result<Self> {
        let backends = match SuggestBackend::from_env().map_err(anyhow::Error::new)? {
            Some(backend) => vec![backend],
            None => vec![SuggestBackend::Ollama, SuggestBackend::OpenAi],
        };

        let mut clients: Vec<Box<dyn LlmClient>> = Vec::new();
        for backend in backends {
            match backend {
                SuggestBackend::Ollama => clients.push(Box::new(OllamaClient::from_env())),
                SuggestBackend::OpenAi => match OpenAiClient::from_env() {
                    Ok(client) => clients.push(Box::new(client)),
                    Err(e) => debug!(error = %e, "OpenAI backend not configured, skipping"),
                },
            }
        }

        Ok(Self::new(catalog, clients))
    }

    /// The catalog this suggester ranks against
    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Suggest icons for a free-text query.
    ///
    /// Fails only on request shape (blank query); provider trouble of any
    /// kind degrades to the scorer instead of erroring.
    pub async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SuggestError::InvalidArgument(
                "query must be non-empty text".to_string(),
            ));
        }

        let prompt = build_suggestion_prompt(query, &self.catalog);
        for client in &self.clients {
            debug!(
                provider = client.provider_name(),
                model = client.model_name(),
                "requesting icon suggestions"
            );
            match client.complete(&prompt).await {
                Ok(text) => match self.validate_response(&text) {
                    Ok(suggestions) if !suggestions.is_empty() => {
                        debug!(
                            provider = client.provider_name(),
                            count = suggestions.len(),
                            "provider suggestions accepted"
                        );
                        return Ok(suggestions);
                    }
                    Ok(_) => {
                        warn!(
                            provider = client.provider_name(),
                            "provider returned no usable suggestions"
                        );
                    }
                    Err(e) => {
                        warn!(
                            provider = client.provider_name(),
                            error = %e,
                            "provider response failed validation"
                        );
                    }
                },
                Err(e) => {
                    warn!(provider = client.provider_name(), error = %e, "provider call failed");
                }
            }
        }

        debug!("falling back to keyword relevance ranking");
        Ok(scorer::rank(query, &self.catalog))
    }

    /// Parse and validate a provider response. Records that do not
    /// resolve to a real library and icon are dropped; URLs and asset
    /// fields always come from the catalog. An empty result after
    /// validation counts as a provider failure upstream.
    fn validate_response(&self, text: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let json = extract_json_array(text)
            .ok_or_else(|| ProviderError::Malformed("no JSON array in response".to_string()))?;
        let records: Vec<RawSuggestion> =
            serde_json::from_str(json).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let mut suggestions = Vec::new();
        for record in records {
            let Some(library) = self.catalog.find_library(&record.library) else {
                debug!(library = %record.library, "dropping suggestion for unknown library");
                continue;
            };
            let Some(entry) = library.find_icon(&record.name) else {
                debug!(
                    library = %record.library,
                    icon = %record.name,
                    "dropping suggestion for unknown icon"
                );
                continue;
            };

            let description = match record.description {
                Some(d) if !d.trim().is_empty() => d,
                _ => {
                    let leading: Vec<&str> =
                        entry.keywords.iter().take(2).map(String::as_str).collect();
                    format!("Represents {}", leading.join(", "))
                }
            };

            let (asset_url, svg) = assets::asset_fields(library, &entry.name);
            suggestions.push(Suggestion {
                name: entry.name.clone(),
                library: library.display_name.clone(),
                description,
                url: library.base_url.clone(),
                asset_url,
                svg,
            });

            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }

        Ok(suggestions)
    }
}

/// Locate the JSON array in raw model output. Models wrap answers in
/// prose and markdown fences; strip those and slice from the first `[`
/// to the last `]`.
fn extract_json_array(text: &str) -> Option<&str> {
    let text = if text.contains("```json") {
        text.split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
    } else if text.contains("```") {
        text.split("```")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .unwrap_or(text)
    } else {
        text
    };

    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}
