use serde::Serialize;

use super::kinds::{CodeFence, Heading};

/// The kind of a segmented block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// An ATX heading line (`#` to `######`).
    Heading {
        /// Number of `#` characters in the marker run.
        level: u8,
    },
    /// A paragraph block (default when no other block opener matches).
    Paragraph,
    /// A fenced code block delimited by triple backticks.
    FencedCode {
        /// Info string from the opening fence, if any.
        info: Option<String>,
        /// False when the document ended before a closing fence.
        closed: bool,
    },
}

/// A segmented block: its classified kind plus its normalized source text.
///
/// `text` is exactly the block string of the segmenter contract: a stripped
/// heading line, a paragraph's stripped lines joined by `\n`, or a full fenced
/// block including its fence lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    pub text: String,
}

impl BlockNode {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The block's content without block-level markup.
    ///
    /// Heading text without its marker, fenced code without its fence lines,
    /// or the paragraph text unchanged.
    pub fn content(&self) -> String {
        match &self.kind {
            BlockKind::Heading { .. } => Heading::text(&self.text).to_string(),
            BlockKind::Paragraph => self.text.clone(),
            BlockKind::FencedCode { closed, .. } => CodeFence::body(&self.text, *closed),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, BlockKind::Heading { .. })
    }
}
