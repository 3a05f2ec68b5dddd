//! GenerateSummaryHandler - Command handler for the summary pipeline.
//!
//! One submission runs the whole sequence: access check, prompt assembly,
//! completion call, document build, serialization to a transient file,
//! upload, cleanup. A failure at any step halts the submission; nothing is
//! retried and no state survives into the next submission.

use std::sync::Arc;

use crate::domain::document::{DocumentBuilder, StructuredDocument};
use crate::domain::foundation::{SubmissionId, ValidationError};
use crate::domain::summary::{SummaryPrompt, SummaryRequest, SummaryStyle, DEFAULT_TEMPERATURE};
use crate::ports::{
    AccessChecker, AccessDeniedReason, CompletionProvider, CompletionRequest, DocumentSerializer,
    FileUploader, ProviderError, RemoteFile, SerializationError, TransferError, UploadRequest,
};

/// Command to generate and deliver one book summary.
#[derive(Debug, Clone)]
pub struct GenerateSummaryCommand {
    /// Book title as entered by the user.
    pub title: String,
    /// Notes or description of the book.
    pub notes: String,
    /// Requested presentation style.
    pub style: SummaryStyle,
    /// Credential for the submission gate, when the user supplied one.
    pub passphrase: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct GenerateSummaryResult {
    /// Id assigned to this submission.
    pub submission_id: SubmissionId,
    /// File name the document was uploaded under.
    pub file_name: String,
    /// Identity of the uploaded file.
    pub remote_file: RemoteFile,
    /// Model that produced the summary text.
    pub model: String,
}

/// Where generated documents are delivered.
#[derive(Debug, Clone)]
pub struct DeliveryOptions {
    /// Destination folder identifier.
    pub folder_id: String,
    /// Target MIME type when the storage service should convert the document
    /// on ingest; `None` stores the file as-is.
    pub convert_to: Option<String>,
}

impl DeliveryOptions {
    /// Creates options that store the document as-is in `folder_id`.
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            convert_to: None,
        }
    }

    /// Requests conversion to `mime_type` at the destination.
    pub fn with_convert_to(mut self, mime_type: impl Into<String>) -> Self {
        self.convert_to = Some(mime_type.into());
        self
    }
}

/// Error type for summary generation.
#[derive(Debug)]
pub enum GenerateSummaryError {
    /// The submission gate denied access.
    AccessDenied(AccessDeniedReason),
    /// Title or notes failed validation.
    InvalidInput(ValidationError),
    /// The completion call failed.
    Provider(ProviderError),
    /// The document could not be written.
    Serialization(SerializationError),
    /// The upload failed.
    Transfer(TransferError),
}

impl std::fmt::Display for GenerateSummaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateSummaryError::AccessDenied(reason) => write!(f, "{}", reason),
            GenerateSummaryError::InvalidInput(err) => write!(f, "{}", err),
            GenerateSummaryError::Provider(err) => write!(f, "Summary generation failed: {}", err),
            GenerateSummaryError::Serialization(err) => {
                write!(f, "Document creation failed: {}", err)
            }
            GenerateSummaryError::Transfer(err) => write!(f, "Document upload failed: {}", err),
        }
    }
}

impl std::error::Error for GenerateSummaryError {}

impl From<ValidationError> for GenerateSummaryError {
    fn from(err: ValidationError) -> Self {
        GenerateSummaryError::InvalidInput(err)
    }
}

impl From<ProviderError> for GenerateSummaryError {
    fn from(err: ProviderError) -> Self {
        GenerateSummaryError::Provider(err)
    }
}

impl From<SerializationError> for GenerateSummaryError {
    fn from(err: SerializationError) -> Self {
        GenerateSummaryError::Serialization(err)
    }
}

impl From<TransferError> for GenerateSummaryError {
    fn from(err: TransferError) -> Self {
        GenerateSummaryError::Transfer(err)
    }
}

/// Handler for the summary pipeline.
pub struct GenerateSummaryHandler {
    provider: Arc<dyn CompletionProvider>,
    serializer: Arc<dyn DocumentSerializer>,
    uploader: Arc<dyn FileUploader>,
    access_checker: Arc<dyn AccessChecker>,
    builder: DocumentBuilder,
    options: DeliveryOptions,
}

impl GenerateSummaryHandler {
    /// Creates a handler with the default document builder.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        serializer: Arc<dyn DocumentSerializer>,
        uploader: Arc<dyn FileUploader>,
        access_checker: Arc<dyn AccessChecker>,
        options: DeliveryOptions,
    ) -> Self {
        Self {
            provider,
            serializer,
            uploader,
            access_checker,
            builder: DocumentBuilder::new(),
            options,
        }
    }

    /// Overrides the document builder (marker mode).
    pub fn with_document_builder(mut self, builder: DocumentBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Runs one submission end to end.
    pub async fn handle(
        &self,
        command: GenerateSummaryCommand,
    ) -> Result<GenerateSummaryResult, GenerateSummaryError> {
        let submission_id = SubmissionId::new();

        self.access_checker
            .check_submission(command.passphrase.as_deref())
            .await
            .into_result()
            .map_err(GenerateSummaryError::AccessDenied)?;

        let request = SummaryRequest::new(command.title, command.notes, command.style)?;

        tracing::info!(
            %submission_id,
            title = %request.title,
            style = %request.style,
            provider = %self.provider.provider_info().name,
            "Generating summary"
        );

        let (document, model) = self.generate_document(&request).await?;
        self.deliver(submission_id, &request, &document, model).await
    }

    /// Requests the completion and converts it into a document.
    ///
    /// Returns the document and the model that produced the text.
    async fn generate_document(
        &self,
        request: &SummaryRequest,
    ) -> Result<(StructuredDocument, String), GenerateSummaryError> {
        let prompt = SummaryPrompt::for_request(request);
        let completion = self
            .provider
            .complete(
                CompletionRequest::new(prompt.system(), prompt.user())
                    .with_temperature(DEFAULT_TEMPERATURE),
            )
            .await?;

        let document = self
            .builder
            .build(request.title.as_str(), completion.content.trim());
        Ok((document, completion.model))
    }

    /// Serializes to a transient file, uploads it, deletes it.
    async fn deliver(
        &self,
        submission_id: SubmissionId,
        request: &SummaryRequest,
        document: &StructuredDocument,
        model: String,
    ) -> Result<GenerateSummaryResult, GenerateSummaryError> {
        let temp = tempfile::Builder::new()
            .prefix(&format!("summary-{submission_id}-"))
            .suffix(&format!(".{}", self.serializer.file_extension()))
            .tempfile()
            .map_err(SerializationError::from)?;

        self.serializer.serialize(document, temp.path()).await?;

        let file_name = request.document_file_name();
        let mut upload = UploadRequest::new(
            temp.path(),
            file_name.as_str(),
            self.options.folder_id.as_str(),
            self.serializer.content_type(),
        );
        if let Some(mime) = &self.options.convert_to {
            upload = upload.with_convert_to(mime);
        }

        // The transient file goes away whether or not the upload succeeded.
        let upload_result = self.uploader.upload(upload).await;
        if let Err(err) = temp.close() {
            tracing::warn!(%submission_id, error = %err, "Failed to delete transient document");
        }
        let remote_file = upload_result?;

        tracing::info!(%submission_id, file_id = %remote_file.id, "Summary uploaded");

        Ok(GenerateSummaryResult {
            submission_id,
            file_name,
            remote_file,
            model,
        })
    }
}
