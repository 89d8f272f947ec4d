pub mod blocks;
pub mod error;
pub mod inline;

use serde::Serialize;

use blocks::{
    BlockBuilder, BlockKind, BlockNode, MarkdownLineClassifier, ParagraphShape,
    kinds::{BlockQuote, List, Paragraph},
};
pub use error::ParseError;
use inline::{InlineSpan, parse_inline};

/// Splits a document into its ordered blocks.
///
/// Single pass over the lines; input is never modified and nothing is cached
/// between calls.
pub fn segment(document: &str) -> Vec<BlockNode> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in document.lines() {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

/// Like [`segment`], returning only the normalized block strings.
pub fn segment_strings(document: &str) -> Vec<String> {
    segment(document).into_iter().map(|b| b.text).collect()
}

/// Inline-parsed content of a block, ready for HTML emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockContent {
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
    Quote { spans: Vec<InlineSpan> },
    UnorderedList { items: Vec<Vec<InlineSpan>> },
    OrderedList { items: Vec<Vec<InlineSpan>> },
    /// Fenced code is a raw zone: its body is never inline parsed.
    Code { info: Option<String>, body: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedBlock {
    pub node: BlockNode,
    pub content: BlockContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParsedDoc {
    pub blocks: Vec<ParsedBlock>,
}

impl ParsedDoc {
    /// Text of the first level-one heading, if the document has one.
    pub fn title(&self) -> Option<String> {
        self.blocks.iter().find_map(|b| match &b.node.kind {
            BlockKind::Heading { level: 1 } => Some(b.node.content()),
            _ => None,
        })
    }
}

/// Segments a document and inline-parses every block.
///
/// # Errors
/// The first unbalanced delimiter aborts the whole document.
pub fn parse_document(document: &str) -> Result<ParsedDoc, ParseError> {
    let blocks = segment(document)
        .into_iter()
        .map(|node| {
            let content = parse_block(&node)?;
            Ok(ParsedBlock { node, content })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    log::debug!("parsed document into {} blocks", blocks.len());
    Ok(ParsedDoc { blocks })
}

/// Inline-parses one block according to its kind and paragraph shape.
pub fn parse_block(node: &BlockNode) -> Result<BlockContent, ParseError> {
    let content = match &node.kind {
        BlockKind::Heading { level } => BlockContent::Heading {
            level: *level,
            spans: parse_inline(&node.content())?,
        },
        BlockKind::FencedCode { info, .. } => BlockContent::Code {
            info: info.clone(),
            body: node.content(),
        },
        BlockKind::Paragraph => match Paragraph::shape(&node.text) {
            ParagraphShape::Plain => BlockContent::Paragraph {
                spans: parse_inline(&node.text)?,
            },
            ParagraphShape::Quote => BlockContent::Quote {
                spans: parse_inline(&BlockQuote::content(&node.text))?,
            },
            ParagraphShape::UnorderedList => BlockContent::UnorderedList {
                items: node
                    .text
                    .lines()
                    .filter_map(List::unordered_item)
                    .map(parse_inline)
                    .collect::<Result<_, _>>()?,
            },
            ParagraphShape::OrderedList => BlockContent::OrderedList {
                items: node
                    .text
                    .lines()
                    .enumerate()
                    .filter_map(|(i, line)| List::ordered_item(line, i + 1))
                    .map(parse_inline)
                    .collect::<Result<_, _>>()?,
            },
        },
    };
    Ok(content)
}
