//! Mock file uploader for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{FileUploader, RemoteFile, TransferError, UploadRequest};

/// Mock uploader that records requests and returns a configured identity.
#[derive(Debug, Clone)]
pub struct MockFileUploader {
    result: RemoteFile,
    fail_with: Arc<Mutex<Option<String>>>,
    uploads: Arc<Mutex<Vec<UploadRequest>>>,
}

impl Default for MockFileUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileUploader {
    /// Creates a mock that accepts every upload.
    pub fn new() -> Self {
        Self {
            result: RemoteFile::new("mock-file-id")
                .with_web_link("https://drive.google.com/file/d/mock-file-id/view"),
            fail_with: Arc::new(Mutex::new(None)),
            uploads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets the remote identity returned on success.
    pub fn with_result(mut self, result: RemoteFile) -> Self {
        self.result = result;
        self
    }

    /// Makes every upload fail with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let mock = Self::new();
        *mock.fail_with.lock().unwrap() = Some(message.into());
        mock
    }

    /// Upload requests recorded so far, in call order.
    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads.lock().unwrap().clone()
    }

    /// Number of uploads attempted so far.
    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl FileUploader for MockFileUploader {
    async fn upload(&self, request: UploadRequest) -> Result<RemoteFile, TransferError> {
        self.uploads.lock().unwrap().push(request);

        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(TransferError::api(500, message.clone())),
            None => Ok(self.result.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> UploadRequest {
        UploadRequest::new("/tmp/x.docx", "x.docx", "folder", "application/test")
    }

    #[tokio::test]
    async fn records_uploads_and_returns_identity() {
        let uploader = MockFileUploader::new();
        let remote = uploader.upload(request()).await.unwrap();

        assert_eq!(remote.id, "mock-file-id");
        assert_eq!(uploader.upload_count(), 1);
        assert_eq!(uploader.uploads()[0].file_name, "x.docx");
    }

    #[tokio::test]
    async fn failing_mock_still_records_the_attempt() {
        let uploader = MockFileUploader::failing("quota exceeded");
        let result = uploader.upload(request()).await;

        assert!(matches!(result, Err(TransferError::Api { status: 500, .. })));
        assert_eq!(uploader.upload_count(), 1);
    }
}
