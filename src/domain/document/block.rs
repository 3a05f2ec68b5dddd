//! Block types for structured documents.

use serde::{Deserialize, Serialize};

/// One structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with a style level (1 = document title, 2 = section).
    Heading { text: String, level: u8 },
    /// A body paragraph.
    Paragraph { text: String },
    /// A bulleted list item.
    ListItem { text: String },
}

impl Block {
    /// Creates a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level,
        }
    }

    /// Creates a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Creates a list item block.
    pub fn list_item(text: impl Into<String>) -> Self {
        Block::ListItem { text: text.into() }
    }

    /// Returns the textual content of the block.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text, .. } => text,
            Block::Paragraph { text } => text,
            Block::ListItem { text } => text,
        }
    }
}

/// The ordered sequence of blocks representing the final document before
/// serialization.
///
/// Invariant: the first block is always `Heading { text = title, level = 1 }`.
/// The invariant is structural - the only constructor takes the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    blocks: Vec<Block>,
}

impl StructuredDocument {
    /// Creates a document containing only the title heading.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::heading(title, 1)],
        }
    }

    /// Appends a block after the title heading.
    pub(crate) fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Returns the blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of blocks, title heading included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: the title heading is present from construction.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns the document title (the text of the leading heading).
    pub fn title(&self) -> &str {
        self.blocks[0].text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_title_emits_level_one_heading() {
        let doc = StructuredDocument::with_title("Atomic Habits");
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.blocks()[0],
            Block::heading("Atomic Habits", 1)
        );
        assert_eq!(doc.title(), "Atomic Habits");
    }

    #[test]
    fn push_preserves_order() {
        let mut doc = StructuredDocument::with_title("T");
        doc.push(Block::heading("Intro", 2));
        doc.push(Block::paragraph("A great book."));
        doc.push(Block::list_item("First idea"));

        let texts: Vec<&str> = doc.blocks().iter().map(Block::text).collect();
        assert_eq!(texts, vec!["T", "Intro", "A great book.", "First idea"]);
    }

    #[test]
    fn block_serializes_with_type_tag() {
        let json = serde_json::to_string(&Block::list_item("apple")).unwrap();
        assert!(json.contains("\"type\":\"list_item\""));
        assert!(json.contains("\"text\":\"apple\""));

        let json = serde_json::to_string(&Block::heading("Intro", 2)).unwrap();
        assert!(json.contains("\"type\":\"heading\""));
        assert!(json.contains("\"level\":2"));
    }

    #[test]
    fn block_roundtrips_through_json() {
        let doc = {
            let mut d = StructuredDocument::with_title("T");
            d.push(Block::paragraph("p"));
            d
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: StructuredDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
