use super::kinds::{CodeFence, FenceSig, Heading};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block segmentation: each line is classified independently
/// without reference to surrounding context. Whether a fence signature opens,
/// closes or is ignored is decided by the builder.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The line with trailing whitespace removed.
    pub text: String,
    /// The line with surrounding whitespace removed.
    pub stripped: String,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the stripped line starts with a fence marker.
    pub fence_sig: Option<FenceSig>,
    /// If the stripped line is a heading, its level.
    pub heading_level: Option<u8>,
}

/// Classifies individual lines for the block segmentation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, line: &str) -> LineClass {
        let text = line.trim_end();
        let stripped = text.trim_start();

        LineClass {
            text: text.to_string(),
            stripped: stripped.to_string(),
            is_blank: stripped.is_empty(),
            fence_sig: CodeFence::sig(stripped),
            heading_level: Heading::level(stripped),
        }
    }
}
