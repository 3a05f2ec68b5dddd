//! File Uploader Port - Local file to cloud storage.
//!
//! The uploader receives a local path plus target metadata and returns the
//! remote file identity. Deleting the local file afterwards is the caller's
//! job, success or failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Port for uploading files to cloud storage.
#[async_trait]
pub trait FileUploader: Send + Sync {
    /// Uploads the file and returns its remote identity.
    async fn upload(&self, request: UploadRequest) -> Result<RemoteFile, TransferError>;
}

/// One upload: the local file and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Path of the local file to upload.
    pub local_path: PathBuf,
    /// File name at the destination.
    pub file_name: String,
    /// Opaque identifier of the destination folder.
    pub folder_id: String,
    /// MIME type of the local file content.
    pub content_type: String,
    /// Target MIME type when the storage service should convert the file on
    /// ingest (e.g. .docx into a native cloud document). `None` stores as-is.
    pub convert_to: Option<String>,
}

impl UploadRequest {
    /// Creates an upload request that stores the file as-is.
    pub fn new(
        local_path: impl Into<PathBuf>,
        file_name: impl Into<String>,
        folder_id: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            local_path: local_path.into(),
            file_name: file_name.into(),
            folder_id: folder_id.into(),
            content_type: content_type.into(),
            convert_to: None,
        }
    }

    /// Requests conversion to `mime_type` at the destination.
    pub fn with_convert_to(mut self, mime_type: impl Into<String>) -> Self {
        self.convert_to = Some(mime_type.into());
        self
    }
}

/// Identity of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    /// Remote file identifier.
    pub id: String,
    /// Browser link to the file, when the service reports one.
    pub web_link: Option<String>,
}

impl RemoteFile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            web_link: None,
        }
    }

    pub fn with_web_link(mut self, link: impl Into<String>) -> Self {
        self.web_link = Some(link.into());
        self
    }
}

/// Upload errors.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Credentials were rejected by the storage service.
    #[error("storage authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The storage API rejected the request.
    #[error("storage api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network error during upload.
    #[error("network error: {0}")]
    Network(String),

    /// Upload timed out.
    #[error("upload timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },

    /// Failed to parse the storage service response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The local file could not be read.
    #[error("i/o error reading local file: {0}")]
    Io(String),
}

impl TransferError {
    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed {
            message: message.into(),
        }
    }

    /// Creates an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
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

impl From<std::io::Error> for TransferError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
