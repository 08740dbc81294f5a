//! Agentic Suggestion Module
//!
//! This module implements LLM-backed icon suggestion from natural
//! language queries. Providers are opaque text-generation capabilities
//! behind the [`LlmClient`] trait; the [`IconSuggester`] orchestrator
//! validates their output against the catalog and falls back to the
//! deterministic keyword scorer whenever a provider is unavailable,
//! unconfigured, or untrustworthy.

pub mod backend;
pub mod llm_client;
pub mod ollama_client;
pub mod openai_client;
pub mod prompt;
pub mod suggester;

// Re-export LLM client types
pub use backend::SuggestBackend;
pub use llm_client::{LlmClient, ProviderError};
pub use ollama_client::OllamaClient;
pub use openai_client::OpenAiClient;

// Re-export the orchestrator
pub use prompt::build_suggestion_prompt;
pub use suggester::IconSuggester;
