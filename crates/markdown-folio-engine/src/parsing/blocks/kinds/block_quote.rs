/// Blockquote paragraph shape with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` prefix and a single following space.
    pub fn strip_prefix(line: &str) -> &str {
        let rest = line.strip_prefix(Self::PREFIX).unwrap_or(line);
        rest.strip_prefix(' ').unwrap_or(rest)
    }

    /// Joins the unprefixed lines of a quote paragraph.
    pub fn content(text: &str) -> String {
        text.lines()
            .map(Self::strip_prefix)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
