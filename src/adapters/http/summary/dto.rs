//! HTTP DTOs for summary endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::summary::{GenerateSummaryCommand, GenerateSummaryResult};
use crate::domain::summary::SummaryStyle;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/summaries`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSummaryRequest {
    /// Book title.
    pub title: String,
    /// Notes or description of the book.
    pub notes: String,
    /// Presentation style; defaults to narrative.
    #[serde(default)]
    pub style: SummaryStyle,
    /// Gate credential, when the deployment requires one.
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl GenerateSummaryRequest {
    /// Converts the DTO into the application command.
    pub fn into_command(self) -> GenerateSummaryCommand {
        GenerateSummaryCommand {
            title: self.title,
            notes: self.notes,
            style: self.style,
            passphrase: self.passphrase,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful summary generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummaryResponse {
    /// Remote identifier of the uploaded document.
    pub file_id: String,
    /// Browser link to the document, when the storage service reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,
    /// File name the document was uploaded under.
    pub file_name: String,
    /// Model that produced the summary text.
    pub model: String,
}

impl From<GenerateSummaryResult> for GenerateSummaryResponse {
    fn from(result: GenerateSummaryResult) -> Self {
        Self {
            file_id: result.remote_file.id,
            web_link: result.remote_file.web_link,
            file_name: result.file_name,
            model: result.model,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SubmissionId;
    use crate::ports::RemoteFile;

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{"title":"Atomic Habits","notes":"habit loops"}"#;
        let request: GenerateSummaryRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title, "Atomic Habits");
        assert_eq!(request.style, SummaryStyle::Narrative);
        assert!(request.passphrase.is_none());
    }

    #[test]
    fn request_deserializes_style_and_passphrase() {
        let json = r#"{
            "title": "T",
            "notes": "n",
            "style": "professional",
            "passphrase": "open sesame"
        }"#;
        let request: GenerateSummaryRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.style, SummaryStyle::Professional);
        assert_eq!(request.passphrase.as_deref(), Some("open sesame"));
    }

    #[test]
    fn response_serializes_from_result() {
        let result = GenerateSummaryResult {
            submission_id: SubmissionId::new(),
            file_name: "Summary - T.docx".to_string(),
            remote_file: RemoteFile::new("abc").with_web_link("https://drive/abc"),
            model: "gpt-3.5-turbo".to_string(),
        };

        let json = serde_json::to_string(&GenerateSummaryResponse::from(result)).unwrap();
        assert!(json.contains("\"file_id\":\"abc\""));
        assert!(json.contains("\"web_link\":\"https://drive/abc\""));
        assert!(json.contains("\"file_name\":\"Summary - T.docx\""));
    }

    #[test]
    fn response_omits_missing_web_link() {
        let result = GenerateSummaryResult {
            submission_id: SubmissionId::new(),
            file_name: "f.docx".to_string(),
            remote_file: RemoteFile::new("abc"),
            model: "mock".to_string(),
        };

        let json = serde_json::to_string(&GenerateSummaryResponse::from(result)).unwrap();
        assert!(!json.contains("web_link"));
    }

    #[test]
    fn error_response_codes_are_stable() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::unauthorized("x").code, "UNAUTHORIZED");
        assert_eq!(ErrorResponse::upstream("x").code, "UPSTREAM_ERROR");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
