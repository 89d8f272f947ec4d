use crate::parsing::error::ParseError;

use super::{
    kinds::{Delimiter, Image, Link},
    splitter::{split_pattern, split_spans},
    types::{InlineSpan, InlineType},
};

/// Parses a block's inline text into an ordered sequence of [`InlineSpan`]s.
///
/// Applies every delimiter in [`Delimiter::PIPELINE`] order, then splits out
/// images and links. Later passes only see spans still typed as text.
///
/// Emphasis runs before code, so a `*` or `_` inside one code span can pair
/// with the same marker in a later code span. The italic run then swallows
/// one backtick from each code span and the code pass fails as unbalanced.
/// Text like that belongs in a fenced block, which is never inline parsed.
///
/// # Errors
/// Fails on the first unbalanced paired delimiter; no partial output is returned.
pub fn parse_inline(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let mut spans = vec![InlineSpan::text(text)];

    for delimiter in Delimiter::PIPELINE {
        spans = split_spans(spans, delimiter.marker, delimiter.kind)?;
    }
    spans = split_pattern(spans, Image::pattern(), InlineType::Image);
    spans = split_pattern(spans, Link::pattern(), InlineType::Link);

    log::trace!("inline text of {} bytes -> {} spans", text.len(), spans.len());
    Ok(spans)
}
