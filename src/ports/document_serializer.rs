//! Document Serializer Port - Structured document to word-processing file.
//!
//! The serializer maps blocks onto word-processing styles: `Heading{level}`
//! to the heading style of that level, `Paragraph` to a body paragraph and
//! `ListItem` to a bulleted-list paragraph style. The output file is
//! transient; the caller owns its lifecycle.

use async_trait::async_trait;
use std::path::Path;

use crate::domain::document::StructuredDocument;

/// Port for writing structured documents to files.
#[async_trait]
pub trait DocumentSerializer: Send + Sync {
    /// Writes `document` to `path` in the serializer's output format.
    ///
    /// An existing file at `path` is overwritten.
    async fn serialize(
        &self,
        document: &StructuredDocument,
        path: &Path,
    ) -> Result<(), SerializationError>;

    /// MIME type of the files this serializer produces.
    fn content_type(&self) -> &'static str;

    /// File extension (without dot) of the files this serializer produces.
    fn file_extension(&self) -> &'static str;
}

/// Document serialization errors.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// The output file could not be created or written.
    #[error("i/o error writing document: {0}")]
    Io(String),

    /// The underlying writer rejected the document.
    #[error("document format error: {0}")]
    Format(String),
}

impl SerializationError {
    /// Creates an i/o error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

impl From<std::io::Error> for SerializationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: SerializationError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn serializer_is_object_safe() {
        fn _accepts_dyn(_serializer: &dyn DocumentSerializer) {}
    }
}
