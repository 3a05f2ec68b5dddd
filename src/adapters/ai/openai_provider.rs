//! OpenAI Provider - Implementation of CompletionProvider for OpenAI's API.
//!
//! Single-shot chat completions over HTTPS. Failures surface immediately as
//! `ProviderError`; a failed submission is reported to the user, never
//! retried.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_model("gpt-3.5-turbo")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAIProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    CompletionProvider, CompletionRequest, CompletionResponse, ProviderError, ProviderInfo,
};

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g. "gpt-3.5-turbo", "gpt-4o").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed, which only happens
    /// with an invalid TLS backend at process start.
    pub fn new(config: OpenAIConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to OpenAI's wire format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: request.system_prompt.clone(),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    /// Sends the request, mapping transport failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, ProviderError> {
        let openai_request = self.to_openai_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses onto the provider error taxonomy.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(ProviderError::AuthenticationFailed),
            429 => Err(ProviderError::rate_limited(Self::parse_retry_after(
                &error_body,
            ))),
            500..=599 => Err(ProviderError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ProviderError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from the error response.
    ///
    /// OpenAI sometimes embeds "try again in Xs" in the error message;
    /// defaults to 30 seconds when absent.
    fn parse_retry_after(error_body: &str) -> u32 {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(s) = parsed
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                if let Some(idx) = s.find("try again in ") {
                    let rest = &s[idx + 13..];
                    if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                        if let Ok(secs) = rest[..num_end].parse::<u32>() {
                            return secs;
                        }
                    }
                }
            }
        }
        30
    }

    /// Parses the completion out of a successful response.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, ProviderError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::parse("No choices in response"))?;

        if choice.message.content.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }

        Ok(CompletionResponse {
            content: choice.message.content,
            model: openai_response.model,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        tracing::debug!(model = %self.config.model, "Requesting completion");
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai", self.config.model.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenAIConfig::new("sk-test")
            .with_model("gpt-4o")
            .with_base_url("http://localhost:9000/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn wire_request_carries_system_then_user() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("sk-test"));
        let request = CompletionRequest::new("be brief", "summarize this").with_temperature(0.7);

        let wire = provider.to_openai_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "be brief");
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.temperature, 0.7);
    }

    #[test]
    fn wire_request_omits_absent_max_tokens() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("sk-test"));
        let wire = provider.to_openai_request(&CompletionRequest::new("s", "u"));
        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn parse_retry_after_reads_the_hint() {
        let body = r#"{"error":{"message":"Rate limit reached, try again in 7s."}}"#;
        assert_eq!(OpenAIProvider::parse_retry_after(body), 7);
    }

    #[test]
    fn parse_retry_after_defaults_to_thirty() {
        assert_eq!(OpenAIProvider::parse_retry_after("not json"), 30);
    }

    #[test]
    fn provider_info_reports_model() {
        let provider = OpenAIProvider::new(OpenAIConfig::new("sk-test").with_model("gpt-3.5-turbo"));
        let info = provider.provider_info();
        assert_eq!(info.name, "openai");
        assert_eq!(info.model, "gpt-3.5-turbo");
    }
}
