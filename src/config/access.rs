//! Submission gate configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Submission gate configuration
///
/// The gate is enabled iff a passphrase is configured; otherwise the service
/// accepts every submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccessConfig {
    /// Shared passphrase required for submissions
    pub passphrase: Option<String>,
}

impl AccessConfig {
    /// Check if the submission gate is enabled
    pub fn gate_enabled(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        // A set-but-blank passphrase would silently lock everyone out (or,
        // trimmed to nothing, read as "no gate"); reject it outright.
        if let Some(passphrase) = &self.passphrase {
            if passphrase.trim().is_empty() {
                return Err(ValidationError::BlankPassphrase);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        let config = AccessConfig::default();
        assert!(!config.gate_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn configured_passphrase_enables_the_gate() {
        let config = AccessConfig {
            passphrase: Some("open sesame".to_string()),
        };
        assert!(config.gate_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_passphrase_is_rejected() {
        let config = AccessConfig {
            passphrase: Some("   ".to_string()),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BlankPassphrase)
        ));
    }
}
