//! LLM Client Trait
//!
//! Unified interface for generative-text providers (Ollama, OpenAI).
//! The orchestrator treats every provider as the same opaque capability:
//! given a prompt string, return a text blob or fail. Nothing beyond that
//! is assumed; whatever comes back is validated before it is trusted.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Default per-request timeout in seconds; override with
/// `PROVIDER_TIMEOUT_SECS`. A provider that never answers must not hang
/// the request.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Unified client interface for generative-text providers
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt, return the raw text response
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}

/// Failures from a generative-text provider. All of these are absorbed by
/// the orchestrator and converted into a scorer fallback; none are ever
/// surfaced to an end user.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(error)
        }
    }
}

/// Per-request timeout shared by all provider clients
pub(crate) fn request_timeout() -> Duration {
    let secs = std::env::var("PROVIDER_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
