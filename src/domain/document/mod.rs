//! Structured summary documents.
//!
//! A [`StructuredDocument`] is the ordered sequence of blocks (headings,
//! paragraphs, list items) produced from the completion API's flat text
//! output. [`DocumentBuilder`] performs that conversion; serialization to a
//! word-processing format lives behind the `DocumentSerializer` port.

mod block;
mod builder;

pub use block::{Block, StructuredDocument};
pub use builder::{DocumentBuilder, MarkerMode};
