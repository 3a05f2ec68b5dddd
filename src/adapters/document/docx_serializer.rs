//! DOCX Serializer - Implementation of DocumentSerializer using docx-rust.
//!
//! Maps blocks onto Word paragraph styles: `Heading{level}` to `Heading<N>`,
//! `ListItem` to `ListBullet`, `Paragraph` to an unstyled body paragraph.
//! The styles are declared in the document's style sheet so Word and Google
//! Docs render them with their usual heading/list presentation.

use async_trait::async_trait;
use docx_rust::document::Paragraph;
use docx_rust::formatting::ParagraphProperty;
use docx_rust::styles::{Style, StyleType};
use docx_rust::Docx;
use std::path::Path;

use crate::domain::document::{Block, StructuredDocument};
use crate::ports::{DocumentSerializer, SerializationError};

/// MIME type of .docx files.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const LIST_BULLET_STYLE: &str = "ListBullet";

/// DocumentSerializer writing Office Open XML (.docx) files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxSerializer;

impl DocxSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Style sheet entries referenced by the emitted paragraphs.
    fn declare_styles(docx: &mut Docx) {
        docx.styles
            .push(Style::new(StyleType::Paragraph, "Heading1").name("heading 1"));
        docx.styles
            .push(Style::new(StyleType::Paragraph, "Heading2").name("heading 2"));
        docx.styles
            .push(Style::new(StyleType::Paragraph, LIST_BULLET_STYLE).name("List Bullet"));
    }

    fn heading_style_id(level: u8) -> String {
        // Word defines Heading1..Heading9; the builder only emits 1 and 2.
        format!("Heading{}", level.clamp(1, 9))
    }
}

#[async_trait]
impl DocumentSerializer for DocxSerializer {
    async fn serialize(
        &self,
        document: &StructuredDocument,
        path: &Path,
    ) -> Result<(), SerializationError> {
        let mut docx = Docx::default();
        Self::declare_styles(&mut docx);

        for block in document.blocks() {
            let paragraph = match block {
                Block::Heading { text, level } => Paragraph::default()
                    .property(
                        ParagraphProperty::default().style_id(Self::heading_style_id(*level)),
                    )
                    .push_text(text.as_str()),
                Block::Paragraph { text } => Paragraph::default().push_text(text.as_str()),
                Block::ListItem { text } => Paragraph::default()
                    .property(ParagraphProperty::default().style_id(LIST_BULLET_STYLE))
                    .push_text(text.as_str()),
            };
            docx.document.push(paragraph);
        }

        docx.write_file(path)
            .map_err(|e| SerializationError::format(e.to_string()))?;

        tracing::debug!(path = %path.display(), blocks = document.len(), "Wrote document");
        Ok(())
    }

    fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    fn file_extension(&self) -> &'static str {
        "docx"
    }
}
