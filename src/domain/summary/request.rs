//! Summary request value objects.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ValidationError;
use super::style::SummaryStyle;

/// Upper bound on title length; Drive file names degrade beyond this.
const MAX_TITLE_CHARS: usize = 256;

/// Upper bound on notes length, to keep prompts inside model context.
const MAX_NOTES_CHARS: usize = 16_384;

/// Validated book title. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookTitle(String);

impl BookTitle {
    /// Creates a title, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let chars = trimmed.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(ValidationError::too_long("title", MAX_TITLE_CHARS, chars));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated reader notes. Non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookNotes(String);

impl BookNotes {
    /// Creates notes, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("notes"));
        }
        let chars = trimmed.chars().count();
        if chars > MAX_NOTES_CHARS {
            return Err(ValidationError::too_long("notes", MAX_NOTES_CHARS, chars));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookNotes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One validated user submission: title, notes and a presentation style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    pub title: BookTitle,
    pub notes: BookNotes,
    pub style: SummaryStyle,
}

impl SummaryRequest {
    /// Validates raw user input into a request.
    pub fn new(
        title: impl Into<String>,
        notes: impl Into<String>,
        style: SummaryStyle,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: BookTitle::new(title)?,
            notes: BookNotes::new(notes)?,
            style,
        })
    }

    /// File name the exported document is uploaded under.
    pub fn document_file_name(&self) -> String {
        format!("Summary - {}.docx", self.title)
    }
}
