//! Mock completion provider for testing.
//!
//! Configurable to return canned completions or injected errors, with call
//! recording so tests can assert on the prompts that were sent.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    CompletionProvider, CompletionRequest, CompletionResponse, ProviderError, ProviderInfo,
};

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text as the completion.
    Success(String),
    /// Fail with a provider-unavailable error carrying this message.
    Unavailable(String),
    /// Fail with an authentication error.
    AuthenticationFailed,
    /// Return a completion with no content.
    Empty,
}

impl MockResponse {
    fn into_result(self) -> Result<CompletionResponse, ProviderError> {
        match self {
            MockResponse::Success(content) => Ok(CompletionResponse {
                content,
                model: "mock".to_string(),
            }),
            MockResponse::Unavailable(message) => Err(ProviderError::unavailable(message)),
            MockResponse::AuthenticationFailed => Err(ProviderError::AuthenticationFailed),
            MockResponse::Empty => Err(ProviderError::EmptyCompletion),
        }
    }
}

/// Mock completion provider.
///
/// Responses are consumed in configuration order; once exhausted, the mock
/// keeps returning the last configured response.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Success(content.into()));
        self
    }

    /// Queues an arbitrary mock response.
    pub fn with_mock_response(self, response: MockResponse) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Requests recorded so far, in call order.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.calls.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };

        match response {
            Some(r) => r.into_result(),
            None => Err(ProviderError::unavailable("mock has no responses configured")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_response_and_records_call() {
        let provider = MockCompletionProvider::new().with_response("A fine book.");
        let response = provider
            .complete(CompletionRequest::new("system", "user").with_temperature(0.7))
            .await
            .unwrap();

        assert_eq!(response.content, "A fine book.");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0].system_prompt, "system");
    }

    #[tokio::test]
    async fn repeats_last_response_when_exhausted() {
        let provider = MockCompletionProvider::new().with_response("once");
        provider.complete(CompletionRequest::new("s", "u")).await.unwrap();
        let again = provider.complete(CompletionRequest::new("s", "u")).await.unwrap();
        assert_eq!(again.content, "once");
    }

    #[tokio::test]
    async fn consumes_queued_responses_in_order() {
        let provider = MockCompletionProvider::new()
            .with_response("first")
            .with_mock_response(MockResponse::Unavailable("down".to_string()));

        assert_eq!(
            provider
                .complete(CompletionRequest::new("s", "u"))
                .await
                .unwrap()
                .content,
            "first"
        );
        assert!(matches!(
            provider.complete(CompletionRequest::new("s", "u")).await,
            Err(ProviderError::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn unconfigured_mock_fails() {
        let provider = MockCompletionProvider::new();
        assert!(provider.complete(CompletionRequest::new("s", "u")).await.is_err());
    }
}
