//! Google Drive Uploader - Implementation of FileUploader for Drive v3.
//!
//! Uses the `uploadType=multipart` endpoint: a single `multipart/related`
//! request whose first part is the file metadata (name, parent folder,
//! optional conversion target) and whose second part is the file content.
//! Asking for `mimeType: application/vnd.google-apps.document` makes Drive
//! convert the uploaded .docx into a native Google Doc on ingest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::service_account::{fetch_access_token, ServiceAccountKey, DRIVE_FILE_SCOPE};
use crate::ports::{FileUploader, RemoteFile, TransferError, UploadRequest};

/// MIME type of a native Google Doc (the conversion target).
pub const GOOGLE_DOC_CONTENT_TYPE: &str = "application/vnd.google-apps.document";

/// Configuration for the Drive uploader.
#[derive(Debug, Clone)]
pub struct GoogleDriveConfig {
    /// Service account used to authenticate.
    pub key: ServiceAccountKey,
    /// Upload endpoint base.
    pub upload_base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleDriveConfig {
    /// Creates a configuration with the production endpoint.
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            upload_base_url: "https://www.googleapis.com/upload/drive/v3".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the upload endpoint base (tests point this at a local server).
    pub fn with_upload_base_url(mut self, url: impl Into<String>) -> Self {
        self.upload_base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Drive v3 implementation of FileUploader.
pub struct GoogleDriveUploader {
    config: GoogleDriveConfig,
    client: Client,
}

impl GoogleDriveUploader {
    /// Creates a new uploader with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be constructed, which only happens
    /// with an invalid TLS backend at process start.
    pub fn new(config: GoogleDriveConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/files?uploadType=multipart&fields=id,webViewLink",
            self.config.upload_base_url
        )
    }
}

#[async_trait]
impl FileUploader for GoogleDriveUploader {
    async fn upload(&self, request: UploadRequest) -> Result<RemoteFile, TransferError> {
        let content = tokio::fs::read(&request.local_path).await?;

        let token = fetch_access_token(&self.client, &self.config.key, DRIVE_FILE_SCOPE).await?;

        let metadata = FileMetadata {
            name: request.file_name.as_str(),
            parents: [request.folder_id.as_str()],
            mime_type: request.convert_to.as_deref(),
        };
        let metadata_json = serde_json::to_string(&metadata)
            .map_err(|e| TransferError::parse(format!("failed to encode metadata: {e}")))?;

        let boundary = format!("bookscribe-{}", Uuid::new_v4());
        let body = multipart_related(&boundary, &metadata_json, &request.content_type, &content);

        tracing::info!(
            file_name = %request.file_name,
            folder_id = %request.folder_id,
            bytes = content.len(),
            "Uploading document to Drive"
        );

        let response = self
            .client
            .post(self.upload_url())
            .bearer_auth(token.expose())
            .header(
                CONTENT_TYPE,
                format!("multipart/related; boundary={boundary}"),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransferError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else {
                    TransferError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => TransferError::authentication(body),
                code => TransferError::api(code, body),
            });
        }

        let file: DriveFile = response
            .json()
            .await
            .map_err(|e| TransferError::parse(format!("invalid upload response: {e}")))?;

        let mut remote = RemoteFile::new(file.id);
        if let Some(link) = file.web_view_link {
            remote = remote.with_web_link(link);
        }
        Ok(remote)
    }
}

/// Builds a `multipart/related` body: JSON metadata part, then media part.
fn multipart_related(
    boundary: &str,
    metadata_json: &str,
    content_type: &str,
    content: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + metadata_json.len() + 256);
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(metadata_json.as_bytes());
    body.extend_from_slice(format!("\r\n--{boundary}\r\nContent-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct FileMetadata<'a> {
    name: &'a str,
    parents: [&'a str; 1],
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    mime_type: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    #[serde(rename = "webViewLink")]
    web_view_link: Option<String>,
}
