//! Google Drive uploader adapters.

mod drive_uploader;
mod mock_uploader;
mod service_account;

pub use drive_uploader::{GoogleDriveConfig, GoogleDriveUploader, GOOGLE_DOC_CONTENT_TYPE};
pub use mock_uploader::MockFileUploader;
pub use service_account::{ServiceAccountKey, DRIVE_FILE_SCOPE};
