use serde::Serialize;

/// The formatting of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InlineType {
    /// Plain text; the only type the splitter re-scans.
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// One contiguous run of uniformly formatted inline text.
///
/// For `Link` the text is the anchor text, for `Image` it is the alt text;
/// both carry the target in `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub text: String,
    pub kind: InlineType,
    pub url: Option<String>,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, kind: InlineType) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// A plain text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, InlineType::Text)
    }

    pub fn with_url(text: impl Into<String>, kind: InlineType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == InlineType::Text
    }
}
