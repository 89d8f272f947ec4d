use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    BlockContent, ParseError, ParsedDoc,
    blocks::kinds::Heading,
    inline::{InlineSpan, InlineType},
    parse_document,
};

/// Parses and renders a markdown document in one call.
///
/// # Errors
/// Propagates the parse error; no partial HTML is produced.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    Ok(to_html(&parse_document(markdown)?))
}

/// Renders a parsed document as a single `<div>` element.
pub fn to_html(doc: &ParsedDoc) -> String {
    let mut out = String::from("<div>");
    for block in &doc.blocks {
        write_block(&mut out, &block.content);
    }
    out.push_str("</div>");
    out
}

fn write_block(out: &mut String, content: &BlockContent) {
    match content {
        BlockContent::Heading { level, spans } => {
            let level = Heading::html_level(*level);
            let _ = write!(out, "<h{level}>");
            write_spans(out, spans);
            let _ = write!(out, "</h{level}>");
        }
        BlockContent::Paragraph { spans } => {
            out.push_str("<p>");
            write_spans(out, spans);
            out.push_str("</p>");
        }
        BlockContent::Quote { spans } => {
            out.push_str("<blockquote>");
            write_spans(out, spans);
            out.push_str("</blockquote>");
        }
        BlockContent::UnorderedList { items } => write_list(out, "ul", items),
        BlockContent::OrderedList { items } => write_list(out, "ol", items),
        BlockContent::Code { info, body } => {
            match info {
                Some(lang) => {
                    let _ = write!(
                        out,
                        "<pre><code class=\"language-{}\">",
                        encode_double_quoted_attribute(lang)
                    );
                }
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(body));
            out.push_str("</code></pre>");
        }
    }
}

fn write_list(out: &mut String, tag: &str, items: &[Vec<InlineSpan>]) {
    let _ = write!(out, "<{tag}>");
    for item in items {
        out.push_str("<li>");
        write_spans(out, item);
        out.push_str("</li>");
    }
    let _ = write!(out, "</{tag}>");
}

fn write_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        write_span(out, span);
    }
}

fn write_span(out: &mut String, span: &InlineSpan) {
    let text = encode_text(&span.text);
    let url = span.url.as_deref().unwrap_or_default();
    match span.kind {
        InlineType::Text => out.push_str(&text),
        InlineType::Bold => {
            let _ = write!(out, "<b>{text}</b>");
        }
        InlineType::Italic => {
            let _ = write!(out, "<i>{text}</i>");
        }
        InlineType::Code => {
            let _ = write!(out, "<code>{text}</code>");
        }
        InlineType::Link => {
            let _ = write!(
                out,
                "<a href=\"{}\">{text}</a>",
                encode_double_quoted_attribute(url)
            );
        }
        InlineType::Image => {
            let _ = write!(
                out,
                "<img src=\"{}\" alt=\"{}\">",
                encode_double_quoted_attribute(url),
                encode_double_quoted_attribute(&span.text)
            );
        }
    }
}
