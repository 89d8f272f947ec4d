use super::{
    classify::LineClass,
    types::{BlockKind, BlockNode},
};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        info: Option<String>,
        lines: Vec<String>,
    },
}

/// State machine that turns classified lines into [`BlockNode`]s.
///
/// Fence state takes precedence over everything else: while a fence is open,
/// every line is appended verbatim until the next fence line closes it.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if let Some(sig) = c.fence_sig {
            self.flush_paragraph();
            self.leaf = LeafState::Fence {
                info: sig.info,
                lines: vec![c.stripped],
            };
            return;
        }

        if c.is_blank {
            self.flush_paragraph();
            return;
        }

        if let Some(level) = c.heading_level {
            self.flush_paragraph();
            self.emit(BlockNode {
                kind: BlockKind::Heading { level },
                text: c.stripped,
            });
            return;
        }

        self.extend_paragraph(c.stripped);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_unterminated_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: LineClass) {
        let LeafState::Fence { info, mut lines } = std::mem::take(&mut self.leaf) else {
            return;
        };

        if c.fence_sig.is_some() {
            lines.push(c.stripped);
            self.emit(BlockNode {
                kind: BlockKind::FencedCode { info, closed: true },
                text: lines.join("\n"),
            });
        } else {
            lines.push(c.text);
            self.leaf = LeafState::Fence { info, lines };
        }
    }

    fn extend_paragraph(&mut self, line: String) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(line),
            _ => self.leaf = LeafState::Paragraph { lines: vec![line] },
        }
    }

    fn flush_paragraph(&mut self) {
        let prev = std::mem::take(&mut self.leaf);
        if let LeafState::Paragraph { lines } = prev {
            let text = lines.join("\n").trim().to_string();
            if !text.is_empty() {
                self.emit(BlockNode {
                    kind: BlockKind::Paragraph,
                    text,
                });
            }
        } else {
            self.leaf = prev; // put back non-paragraph leaf (e.g. fence)
        }
    }

    fn flush_unterminated_fence(&mut self) {
        if let LeafState::Fence { info, mut lines } = std::mem::take(&mut self.leaf) {
            // Unterminated fence: treat end of input as the closing fence
            while lines.len() > 1 && lines.last().is_some_and(|l| l.trim().is_empty()) {
                lines.pop();
            }
            log::warn!(
                "code fence opened with {:?} was not closed before end of document",
                lines.first().map(String::as_str).unwrap_or_default()
            );
            self.emit(BlockNode {
                kind: BlockKind::FencedCode {
                    info,
                    closed: false,
                },
                text: lines.join("\n"),
            });
        }
    }

    fn emit(&mut self, block: BlockNode) {
        log::trace!("block {}: {:?}", self.out.len(), block.kind);
        self.out.push(block);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Vec<BlockNode> {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(MarkdownLineClassifier.classify(line));
        }
        builder.finish()
    }

    #[test]
    fn paragraph_lines_accumulate_until_blank() {
        let blocks = build(&["one", "  two  ", "", "three"]);
        assert_eq!(
            blocks,
            vec![
                BlockNode {
                    kind: BlockKind::Paragraph,
                    text: "one\ntwo".into()
                },
                BlockNode {
                    kind: BlockKind::Paragraph,
                    text: "three".into()
                },
            ]
        );
    }

    #[test]
    fn heading_interrupts_paragraph() {
        let blocks = build(&["before", "## Title", "after"]);
        let texts: Vec<_> = blocks.iter().map(BlockNode::as_str).collect();
        assert_eq!(texts, vec!["before", "## Title", "after"]);
        assert_eq!(blocks[1].kind, BlockKind::Heading { level: 2 });
    }

    #[test]
    fn fence_interrupts_paragraph() {
        let blocks = build(&["text", "```", "code", "```"]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].as_str(), "text");
        assert_eq!(blocks[1].as_str(), "```\ncode\n```");
    }

    #[test]
    fn fence_keeps_interior_whitespace_and_headings() {
        let blocks = build(&["```rust", "    indented", "", "# not a heading", "```"]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::FencedCode {
                info: Some("rust".into()),
                closed: true
            }
        );
        assert_eq!(
            blocks[0].as_str(),
            "```rust\n    indented\n\n# not a heading\n```"
        );
    }

    #[test]
    fn unterminated_fence_is_closed_at_eof() {
        let blocks = build(&["```", "left open", "", "  "]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::FencedCode {
                info: None,
                closed: false
            }
        );
        assert_eq!(blocks[0].as_str(), "```\nleft open");
    }

    #[test]
    fn consecutive_blank_lines_emit_nothing() {
        assert!(build(&["", "   ", ""]).is_empty());
    }
}
