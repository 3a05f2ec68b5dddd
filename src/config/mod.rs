//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `BOOKSCRIBE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use bookscribe::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod access;
mod ai;
mod drive;
mod error;
mod server;

pub use access::AccessConfig;
pub use ai::AiConfig;
pub use drive::DriveConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for Bookscribe. Load using
/// [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion provider configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Google Drive delivery configuration
    pub drive: DriveConfig,

    /// Submission gate configuration
    #[serde(default)]
    pub access: AccessConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BOOKSCRIBE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BOOKSCRIBE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BOOKSCRIBE__DRIVE__FOLDER_ID=...` -> `drive.folder_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BOOKSCRIBE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.drive.validate()?;
        self.access.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("BOOKSCRIBE__AI__OPENAI_API_KEY", "sk-test");
        env::set_var("BOOKSCRIBE__DRIVE__FOLDER_ID", "folder-123");
        env::set_var(
            "BOOKSCRIBE__DRIVE__SERVICE_ACCOUNT_KEY_FILE",
            "/etc/bookscribe/key.json",
        );
    }

    fn clear_env() {
        for key in [
            "BOOKSCRIBE__AI__OPENAI_API_KEY",
            "BOOKSCRIBE__DRIVE__FOLDER_ID",
            "BOOKSCRIBE__DRIVE__SERVICE_ACCOUNT_KEY_FILE",
            "BOOKSCRIBE__ACCESS__PASSPHRASE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_and_validates_with_minimal_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();

        let config = AppConfig::load().unwrap();
        config.validate().unwrap();

        assert_eq!(config.drive.folder_id, "folder-123");
        assert_eq!(config.ai.model, "gpt-3.5-turbo");
        assert!(config.access.passphrase.is_none());

        clear_env();
    }

    #[test]
    fn missing_drive_section_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        assert!(AppConfig::load().is_err());
    }
}
