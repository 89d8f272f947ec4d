/// ATX heading block type with owned delimiter constant.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level that has an HTML counterpart.
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the length of the marker run if `stripped` is one or more `#`
    /// followed by a space. Runs longer than `u8::MAX` saturate.
    pub fn level(stripped: &str) -> Option<u8> {
        let run = stripped.len() - stripped.trim_start_matches(Self::MARKER).len();
        if run == 0 || !stripped[run..].starts_with(' ') {
            return None;
        }
        Some(u8::try_from(run).unwrap_or(u8::MAX))
    }

    /// The `<hN>` level for a marker run, clamped to [`Self::MAX_LEVEL`].
    pub fn html_level(level: u8) -> u8 {
        level.clamp(1, Self::MAX_LEVEL)
    }

    /// Strips the marker run and surrounding whitespace from a heading line.
    pub fn text(line: &str) -> &str {
        line.trim_start_matches(Self::MARKER).trim()
    }
}
