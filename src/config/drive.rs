//! Google Drive delivery configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Google Drive delivery configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Path to the service account JSON key file
    pub service_account_key_file: String,

    /// Destination folder identifier
    pub folder_id: String,

    /// Convert uploaded documents into native Google Docs
    #[serde(default = "default_convert")]
    pub convert_to_google_doc: bool,
}

impl DriveConfig {
    /// Validate Drive configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_account_key_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired(
                "DRIVE_SERVICE_ACCOUNT_KEY_FILE",
            ));
        }
        if self.folder_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DRIVE_FOLDER_ID"));
        }
        Ok(())
    }
}

fn default_convert() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DriveConfig {
        DriveConfig {
            service_account_key_file: "/etc/bookscribe/key.json".to_string(),
            folder_id: "folder-123".to_string(),
            convert_to_google_doc: default_convert(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
        assert!(config().convert_to_google_doc);
    }

    #[test]
    fn blank_folder_id_fails() {
        let config = DriveConfig {
            folder_id: "  ".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("DRIVE_FOLDER_ID"))
        ));
    }

    #[test]
    fn blank_key_file_fails() {
        let config = DriveConfig {
            service_account_key_file: String::new(),
            ..config()
        };
        assert!(config.validate().is_err());
    }
}
