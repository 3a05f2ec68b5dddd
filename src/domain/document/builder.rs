//! Conversion of flat summary text into a structured document.
//!
//! The completion API returns a single block of text. Blank lines delimit
//! sections; a section's first line becomes a level-2 heading when more lines
//! follow, and lines opening with a list marker become bulleted items.
//! The conversion is total: any input string produces a document, malformed
//! input degrades into plain paragraphs.

use super::block::{Block, StructuredDocument};

/// How list markers at the start of a line are recognized and stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerMode {
    /// A marker (`-`, `•`, or `1.`) counts only when followed by whitespace;
    /// the marker and the whitespace run after it are stripped.
    #[default]
    MarkerAware,
    /// Earlier generations matched the marker lexically and always dropped
    /// the first two characters of the line, so `-apple` yields `pple` and
    /// `1.5 grams` yields `5 grams`. Use this mode when output must match
    /// documents those versions produced.
    FixedStrip,
}

/// Builds a [`StructuredDocument`] from a title and the raw summary body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder {
    marker_mode: MarkerMode,
}

impl DocumentBuilder {
    /// Creates a builder with marker-aware list detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list marker mode.
    pub fn with_marker_mode(mut self, mode: MarkerMode) -> Self {
        self.marker_mode = mode;
        self
    }

    /// Converts `body` into a document titled `title`.
    ///
    /// Pure function of its inputs; never fails. Rules:
    ///
    /// 1. The first block is `Heading { title, level: 1 }`.
    /// 2. `body` splits into sections on blank lines (`"\n\n"`); sections that
    ///    are pure whitespace are discarded, order is preserved.
    /// 3. Section lines are trimmed individually.
    /// 4. A one-line section becomes a paragraph.
    /// 5. A multi-line section becomes a level-2 heading (first line) followed
    ///    by one block per remaining line: a list item when the line opens
    ///    with a marker, otherwise a paragraph. Lines that are empty after
    ///    trimming are kept as empty paragraphs.
    pub fn build(&self, title: &str, body: &str) -> StructuredDocument {
        let mut doc = StructuredDocument::with_title(title);

        for section in body.split("\n\n") {
            let section = section.trim();
            if section.is_empty() {
                continue;
            }

            let lines: Vec<&str> = section.split('\n').map(str::trim).collect();
            if lines.len() == 1 {
                doc.push(Block::paragraph(lines[0]));
                continue;
            }

            doc.push(Block::heading(lines[0], 2));
            for line in &lines[1..] {
                match self.strip_marker(line) {
                    Some(item) => doc.push(Block::list_item(item)),
                    None => doc.push(Block::paragraph(*line)),
                }
            }
        }

        doc
    }

    /// Returns the list item text when `line` opens with a list marker.
    fn strip_marker(&self, line: &str) -> Option<String> {
        match self.marker_mode {
            MarkerMode::FixedStrip => {
                if line.starts_with('-') || line.starts_with('•') || line.starts_with("1.") {
                    // Two chars, not two bytes: `•` is multi-byte in UTF-8.
                    let stripped: String = line.chars().skip(2).collect();
                    Some(stripped.trim_start().to_string())
                } else {
                    None
                }
            }
            MarkerMode::MarkerAware => {
                let rest = line
                    .strip_prefix('-')
                    .or_else(|| line.strip_prefix('•'))
                    .or_else(|| line.strip_prefix("1."))?;
                let item = rest.trim_start();
                // Without whitespace after the marker this is prose, not a
                // list item ("1.5 grams", "-3 degrees").
                if item.len() == rest.len() {
                    return None;
                }
                Some(item.to_string())
            }
        }
    }
}
