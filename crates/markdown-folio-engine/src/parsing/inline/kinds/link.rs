use std::sync::OnceLock;

use regex::Regex;

/// Markdown image `![alt](url)`.
pub struct Image;

impl Image {
    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid image regex")
        })
    }
}

/// Markdown link `[text](url)`.
///
/// Images are split out first, so a `[` reaching this pattern is never
/// preceded by an image's `!`.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").expect("Invalid link regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_pattern_captures_alt_and_url() {
        let caps = Image::pattern().captures("see ![a cat](cat.png)").unwrap();
        assert_eq!(&caps[1], "a cat");
        assert_eq!(&caps[2], "cat.png");
    }

    #[test]
    fn link_pattern_captures_text_and_url() {
        let caps = Link::pattern()
            .captures("go [home](https://example.com)")
            .unwrap();
        assert_eq!(&caps[1], "home");
        assert_eq!(&caps[2], "https://example.com");
    }

    #[test]
    fn bracket_without_target_is_not_a_link() {
        assert!(Link::pattern().captures("[just brackets]").is_none());
    }
}
