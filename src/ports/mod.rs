//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `CompletionProvider` - LLM completion API
//! - `DocumentSerializer` - structured document to word-processing file
//! - `FileUploader` - local file to cloud storage
//! - `AccessChecker` - submission gate (shared passphrase or open access)

mod access_checker;
mod completion_provider;
mod document_serializer;
mod file_uploader;

pub use access_checker::{AccessChecker, AccessDeniedReason, AccessResult};
pub use completion_provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, ProviderError, ProviderInfo,
};
pub use document_serializer::{DocumentSerializer, SerializationError};
pub use file_uploader::{FileUploader, RemoteFile, TransferError, UploadRequest};
