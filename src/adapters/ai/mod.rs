//! Completion provider adapters.

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockCompletionProvider, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
