//! Ollama Client
//!
//! LLM client implementation for a local Ollama daemon.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::llm_client::{request_timeout, LlmClient, ProviderError};

/// Default Ollama host
const DEFAULT_HOST: &str = "http://localhost:11434";

/// Default Ollama model
const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Ollama chat API client
#[derive(Clone)]
pub struct OllamaClient {
    host: String,
    client: reqwest::Client,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    /// Create a new client against the given host
    pub fn new(host: String) -> Self {
        let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            host,
            client: reqwest::Client::new(),
            model,
            timeout: request_timeout(),
        }
    }

    /// Create with a specific model
    pub fn with_model(host: String, model: &str) -> Self {
        Self {
            host,
            client: reqwest::Client::new(),
            model: model.to_string(),
            timeout: request_timeout(),
        }
    }

    /// Create from environment variables (`OLLAMA_HOST`, `OLLAMA_MODEL`)
    pub fn from_env() -> Self {
        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Self::new(host)
    }

    /// Internal API call implementation
    async fn call_api(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.host))
            .timeout(self.timeout)
            .json(&serde_json::json!({
                "model": &self.model,
                "messages": [{"role": "user", "content": prompt}],
                "stream": false
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::BadStatus { status, body });
        }

        #[derive(Deserialize)]
        struct Message {
            content: String,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            message: Message,
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        if api_response.message.content.trim().is_empty() {
            return Err(ProviderError::Malformed(
                "empty response from Ollama".to_string(),
            ));
        }

        Ok(api_response.message.content)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.call_api(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "Ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = OllamaClient::new(DEFAULT_HOST.to_string());
        assert_eq!(client.model_name(), DEFAULT_MODEL);
        assert_eq!(client.provider_name(), "Ollama");
    }

    #[test]
    fn test_with_model() {
        let client = OllamaClient::with_model(DEFAULT_HOST.to_string(), "mistral");
        assert_eq!(client.model_name(), "mistral");
    }
}
