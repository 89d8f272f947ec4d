//! # Page Metadata
//!
//! Everything a page generator needs besides the rendered body: title,
//! date stamp, excerpt and template substitution. All functions are pure
//! string transforms; reading and writing files is left to the caller.

pub mod comments;
pub mod date;
pub mod excerpt;
pub mod title;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;
use thiserror::Error;

pub use comments::strip_comments;
pub use date::{date_from_filename, extract_page_date, inject_page_date};
pub use excerpt::first_paragraph;
pub use title::{extract_title, title_from_filename, unwrap_surrounding_fence};

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LEN: usize = 180;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("No title found in markdown")]
    MissingTitle,
}

/// Metadata handed to templates alongside the rendered HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    /// `YYYY-MM-DD` from the page-date comment or the file name.
    pub date: Option<String>,
    pub excerpt: Option<String>,
}

impl PageMeta {
    /// Collects page metadata from raw markdown (comments still present).
    ///
    /// A missing title is recovered from the file name rather than reported.
    pub fn from_markdown(markdown: &str, file_name: &str, excerpt_len: usize) -> Self {
        let date = extract_page_date(markdown).or_else(|| date_from_filename(file_name));
        let clean = strip_comments(markdown);
        let title = extract_title(&clean).unwrap_or_else(|err| {
            log::debug!("{file_name}: {err}, using file name");
            title_from_filename(file_name)
        });

        Self {
            title,
            date,
            excerpt: first_paragraph(&clean, excerpt_len),
        }
    }
}

/// Substitutes `{{ Title }}`, `{{ Content }}`, `{{ Description }}` and
/// `{{ PageDate }}` in a page template.
///
/// Metadata values are HTML escaped; `content_html` is expected to be
/// rendered HTML already and is inserted verbatim.
pub fn render_template(template: &str, meta: &PageMeta, content_html: &str) -> String {
    let excerpt = meta.excerpt.as_deref().unwrap_or_default();
    let date = meta.date.as_deref().unwrap_or_default();
    template
        .replace("{{ Title }}", &encode_text(&meta.title))
        .replace("{{ Description }}", &encode_double_quoted_attribute(excerpt))
        .replace("{{ PageDate }}", &encode_text(date))
        .replace("{{ Content }}", content_html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn meta_from_dated_post_without_heading() {
        let meta = PageMeta::from_markdown(
            "<!-- draft -->\nJust some words.",
            "2024-03-09-quick-note.md",
            DEFAULT_EXCERPT_LEN,
        );
        assert_eq!(
            meta,
            PageMeta {
                title: "Quick Note".into(),
                date: Some("2024-03-09".into()),
                excerpt: Some("Just some words.".into()),
            }
        );
    }

    #[test]
    fn date_comment_beats_file_name() {
        let meta = PageMeta::from_markdown(
            "<!-- page-date: 2020-01-01 -->\n# Real Title\n\nBody",
            "2024-03-09-x.md",
            DEFAULT_EXCERPT_LEN,
        );
        assert_eq!(meta.title, "Real Title");
        assert_eq!(meta.date.as_deref(), Some("2020-01-01"));
        assert_eq!(meta.excerpt.as_deref(), Some("Body"));
    }

    #[test]
    fn template_substitution() {
        let meta = PageMeta {
            title: "T".into(),
            date: None,
            excerpt: Some("E".into()),
        };
        let out = render_template(
            "<title>{{ Title }}</title><meta content=\"{{ Description }}\"><time>{{ PageDate }}</time>{{ Content }}",
            &meta,
            "<p>x</p>",
        );
        assert_eq!(
            out,
            "<title>T</title><meta content=\"E\"><time></time><p>x</p>"
        );
    }

    #[test]
    fn template_escapes_metadata() {
        let meta = PageMeta {
            title: "Fish & <Chips>".into(),
            date: Some("2024-01-01".into()),
            excerpt: Some("Say \"hi\" & go".into()),
        };
        let out = render_template(
            "<title>{{ Title }}</title><meta content=\"{{ Description }}\">{{ Content }}",
            &meta,
            "<p>kept</p>",
        );
        assert_eq!(
            out,
            "<title>Fish &amp; &lt;Chips&gt;</title><meta content=\"Say &quot;hi&quot; &amp; go\"><p>kept</p>"
        );
    }
}
