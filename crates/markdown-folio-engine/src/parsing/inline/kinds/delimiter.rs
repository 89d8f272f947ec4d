use crate::parsing::inline::types::InlineType;

/// A paired inline delimiter and the span type it produces.
///
/// All delimiter knowledge lives here; the splitter never hardcodes markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: InlineType,
}

impl Delimiter {
    pub const STRONG: Delimiter = Delimiter {
        marker: "**",
        kind: InlineType::Bold,
    };
    pub const EMPHASIS: Delimiter = Delimiter {
        marker: "*",
        kind: InlineType::Italic,
    };
    pub const EMPHASIS_ALT: Delimiter = Delimiter {
        marker: "_",
        kind: InlineType::Italic,
    };
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: InlineType::Code,
    };

    /// Delimiters in the order they are applied. Strong must run before
    /// emphasis so `**` is never read as two `*` markers.
    pub const PIPELINE: [Delimiter; 4] = [
        Self::STRONG,
        Self::EMPHASIS,
        Self::EMPHASIS_ALT,
        Self::CODE,
    ];

    /// Single-character markers matched with word-boundary awareness instead
    /// of literal pairing.
    pub const FLANKING_MARKERS: [char; 2] = ['*', '_'];

    /// Returns the marker char if `marker` is matched by flanking rules.
    pub fn flanking_char(marker: &str) -> Option<char> {
        let mut chars = marker.chars();
        let c = chars.next()?;
        (chars.next().is_none() && Self::FLANKING_MARKERS.contains(&c)).then_some(c)
    }

    /// Word characters: a flanking marker touching one on its outer side is
    /// part of a word (`snake_case`), not markup.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}
