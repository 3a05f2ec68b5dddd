//! Prompt assembly for the completion provider.

use super::request::SummaryRequest;

/// System role given to the completion provider.
pub const SYSTEM_PROMPT: &str =
    "You are a literary critic and professional book summarizer.";

/// Sampling temperature used for summary generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// The two prompt strings sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPrompt {
    system: String,
    user: String,
}

impl SummaryPrompt {
    /// Assembles the prompt for a validated request.
    ///
    /// The user prompt asks for a fixed set of sections (summary, thesis,
    /// takeaways, chapter notes, quotes) so the completion output maps onto
    /// the document structure, and forbids markdown since the output is
    /// converted to word-processing styles, not rendered as markdown.
    pub fn for_request(request: &SummaryRequest) -> Self {
        let user = format!(
            "Provide a comprehensive summary and overview of the book titled \
             \"{title}\" using the following notes: {notes}.\n\
             Include:\n\
             - General summary\n\
             - Thesis of the book\n\
             - Main takeaways\n\
             - Chapter-by-chapter key ideas\n\
             - Important quotes (in-line and in a dedicated section)\n\
             Please use the summary style: {style}. \
             Do NOT use markdown (**bold**, _italic_) formatting.",
            title = request.title,
            notes = request.notes.as_str(),
            style = request.style,
        );

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}
