//! Summary requests - what the user submits and how it becomes a prompt.

mod prompt;
mod request;
mod style;

pub use prompt::{SummaryPrompt, DEFAULT_TEMPERATURE, SYSTEM_PROMPT};
pub use request::{BookNotes, BookTitle, SummaryRequest};
pub use style::SummaryStyle;
