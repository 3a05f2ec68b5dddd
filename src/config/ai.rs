//! Completion provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Completion provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Model to request completions from
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional cap on generated tokens
    pub max_tokens: Option<u32>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate completion provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_production_endpoint() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.timeout(), Duration::from_secs(120));
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let config = AiConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = AiConfig {
            openai_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn out_of_range_temperature_fails_validation() {
        let config = AiConfig {
            openai_api_key: Some("sk-test".to_string()),
            temperature: 3.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemperature)
        ));
    }
}
