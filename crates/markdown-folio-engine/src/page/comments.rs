use std::sync::OnceLock;

use regex::Regex;

fn comment_regex() -> &'static Regex {
    static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    COMMENT_REGEX.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"))
}

/// Removes every `<!-- ... -->` comment, including multi-line ones.
///
/// The parser has no notion of comments; callers strip them before segmenting.
pub fn strip_comments(markdown: &str) -> String {
    comment_regex().replace_all(markdown, "").into_owned()
}
