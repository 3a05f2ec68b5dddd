//! Completion Provider Port - Interface for LLM provider integrations.
//!
//! Abstracts the completion API call so the summary pipeline can generate
//! text without coupling to a specific vendor. The pipeline treats the
//! returned completion purely as an opaque string.
//!
//! Completions here are single-shot and non-streaming: one request per user
//! submission, and a failure halts that submission without retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for LLM completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generates a single text completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;

    /// Provider identification for logging.
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System role content guiding model behavior.
    pub system_prompt: String,
    /// The user prompt.
    pub user_prompt: String,
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: f32,
    /// Optional cap on generated tokens.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a request with temperature 0.0 and no token cap.
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated text.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
}

/// Provider identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "openai").
    pub name: String,
    /// Model identifier (e.g. "gpt-3.5-turbo").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Completion provider errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the provider accepts requests again.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// The provider returned a completion with no content.
    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

impl ProviderError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
