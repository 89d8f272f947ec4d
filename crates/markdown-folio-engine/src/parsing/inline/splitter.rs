use regex::Regex;

use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::Delimiter,
    types::{InlineSpan, InlineType},
};

/// Re-splits every plain text span on `delimiter`, typing the enclosed runs as `kind`.
///
/// Spans that already carry a non-text type pass through unchanged, so the
/// order of successive calls decides precedence between delimiters.
///
/// `*` and `_` are matched with word-boundary awareness and never fail: a
/// span without a match is kept as is. Every other delimiter is split
/// literally and must occur an even number of times in each text span.
///
/// # Errors
/// [`ParseError::UnbalancedDelimiter`] when a literally split delimiter is unpaired.
pub fn split_spans(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: InlineType,
) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        match Delimiter::flanking_char(delimiter) {
            Some(marker) => split_flanking(span, marker, kind, &mut out),
            None => split_paired(&span.text, delimiter, kind, &mut out)?,
        }
    }

    Ok(out)
}

/// Literal split: parts alternate outside / inside, empty parts are skipped.
fn split_paired(
    text: &str,
    delimiter: &str,
    kind: InlineType,
    out: &mut Vec<InlineSpan>,
) -> Result<(), ParseError> {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() % 2 == 0 {
        return Err(ParseError::UnbalancedDelimiter {
            delimiter: delimiter.to_string(),
        });
    }

    for (i, part) in parts.into_iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i % 2 == 0 {
            out.push(InlineSpan::text(part));
        } else {
            out.push(InlineSpan::new(part, kind));
        }
    }
    Ok(())
}

/// Boundary-aware split for single-character emphasis markers.
fn split_flanking(span: InlineSpan, marker: char, kind: InlineType, out: &mut Vec<InlineSpan>) {
    let mut cur = Cursor::new(&span.text);
    let mut pieces = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if let Some((start, inner, end)) = try_match_flanking(&mut cur, marker) {
            if start > text_start {
                pieces.push(InlineSpan::text(&span.text[text_start..start]));
            }
            pieces.push(InlineSpan::new(inner, kind));
            text_start = end;
            continue;
        }
        cur.bump();
    }

    if pieces.is_empty() {
        // No match: keep the original span
        out.push(span);
        return;
    }
    if text_start < span.text.len() {
        pieces.push(InlineSpan::text(&span.text[text_start..]));
    }
    out.extend(pieces);
}

/// Attempts to match `marker inner marker` at the cursor.
///
/// The opening marker must not follow a word character, the inner text must
/// be non-empty and free of the marker, and the closing marker must not be
/// followed by a word character. On success the cursor moves past the match
/// and `(start, inner, end)` is returned; on failure the cursor is untouched.
fn try_match_flanking<'a>(cur: &mut Cursor<'a>, marker: char) -> Option<(usize, &'a str, usize)> {
    if cur.peek() != Some(marker) || cur.prev().is_some_and(Delimiter::is_word_char) {
        return None;
    }

    let start = cur.i;
    let inner_start = start + marker.len_utf8();
    let close = cur.find_from(inner_start, marker)?;
    if close == inner_start {
        return None;
    }
    let end = close + marker.len_utf8();
    if cur.char_at(end).is_some_and(Delimiter::is_word_char) {
        return None;
    }

    let s = cur.s;
    cur.seek(end);
    Some((start, &s[inner_start..close], end))
}

/// Splits plain text spans on every match of `pattern`, whose first capture
/// group becomes the span text and second capture group its url.
///
/// Used for images and links; never fails.
pub fn split_pattern(spans: Vec<InlineSpan>, pattern: &Regex, kind: InlineType) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_text() {
            out.push(span);
            continue;
        }

        let mut last_end = 0;
        for caps in pattern.captures_iter(&span.text) {
            let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > last_end {
                out.push(InlineSpan::text(&span.text[last_end..whole.start()]));
            }
            out.push(InlineSpan::with_url(text.as_str(), kind, url.as_str()));
            last_end = whole.end();
        }

        if last_end == 0 {
            out.push(span);
        } else if last_end < span.text.len() {
            out.push(InlineSpan::text(&span.text[last_end..]));
        }
    }

    out
}
