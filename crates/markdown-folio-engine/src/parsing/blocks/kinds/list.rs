/// List paragraph shapes with owned marker constants.
pub struct List;

impl List {
    pub const UNORDERED_MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Returns the item text if `line` starts with an unordered marker.
    pub fn unordered_item(line: &str) -> Option<&str> {
        Self::UNORDERED_MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    /// Returns the item text if `line` starts with `{number}. `.
    pub fn ordered_item(line: &str, number: usize) -> Option<&str> {
        line.strip_prefix(number.to_string().as_str())?
            .strip_prefix(". ")
    }
}
