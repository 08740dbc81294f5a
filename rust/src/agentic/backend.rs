//! Backend Selection
//!
//! Enum for restricting the provider chain to one LLM backend
//! (Ollama or OpenAI). With no selection, the orchestrator tries
//! Ollama first and OpenAI second.

use std::str::FromStr;

/// LLM backend provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestBackend {
    /// Local Ollama daemon (default)
    #[default]
    Ollama,
    /// OpenAI GPT
    OpenAi,
}

impl SuggestBackend {
    /// Read the `SUGGEST_BACKEND` environment variable.
    ///
    /// Valid values: "ollama", "local", "openai", "gpt". Returns `None`
    /// when the variable is unset (use the full chain), an error when it
    /// is set to something unrecognized.
    pub fn from_env() -> Result<Option<Self>, ParseBackendError> {
        match std::env::var("SUGGEST_BACKEND") {
            Ok(value) => value.parse().map(Some),
            Err(_) => Ok(None),
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            SuggestBackend::Ollama => "Ollama",
            SuggestBackend::OpenAi => "OpenAI",
        }
    }
}

/// Error type for parsing SuggestBackend
#[derive(Debug)]
pub struct ParseBackendError(String);

impl std::fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for SuggestBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" | "local" => Ok(SuggestBackend::Ollama),
            "openai" | "gpt" => Ok(SuggestBackend::OpenAi),
            other => Err(ParseBackendError(format!(
                "Unknown SUGGEST_BACKEND '{}'. Valid values: ollama, local, openai, gpt",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SuggestBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
