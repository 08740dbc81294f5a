//! Suggestion output record
//!
//! The shape returned to callers regardless of whether a suggestion came
//! from an LLM provider or from the keyword scorer. Constructed per request,
//! never persisted.

use serde::{Deserialize, Serialize};

/// A single icon suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Icon name, unique within its library
    pub name: String,
    /// Display name of the owning library
    pub library: String,
    /// Human-readable justification for the match
    pub description: String,
    /// Library homepage
    pub url: String,
    /// Direct URL for the raw vector asset, when the library exposes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Inline vector markup. Only populated with a generic placeholder when
    /// the library has no asset URL scheme; real asset fetching is a caller
    /// concern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}
