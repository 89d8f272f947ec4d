use crate::parsing::blocks::kinds::CodeFence;

use super::PageError;

/// Unwraps a document whose whole content sits inside one code fence.
///
/// Authors sometimes paste a page inside ```` ```markdown ```` fences. The
/// fence is only removed when it is the first non-blank line and a matching
/// fence is the last non-blank line.
pub fn unwrap_surrounding_fence(markdown: &str) -> &str {
    let lines: Vec<&str> = markdown.lines().collect();
    let Some(first) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return markdown;
    };
    let Some(last) = lines.iter().rposition(|l| !l.trim().is_empty()) else {
        return markdown;
    };
    if last <= first {
        return markdown;
    }

    let opening = lines[first].trim_start();
    if CodeFence::sig(opening).is_none() {
        return markdown;
    }
    let fence = opening.split_whitespace().next().unwrap_or(CodeFence::BACKTICKS);
    let fence_run = &fence[..fence.len() - fence.trim_start_matches('`').len()];
    if !lines[last].trim_start().starts_with(fence_run) {
        return markdown;
    }

    // Slice the original text so no line is copied.
    let start = line_offset(markdown, first + 1);
    let end = line_offset(markdown, last);
    markdown[start..end].trim_matches(['\r', '\n'])
}

/// Byte offset of the start of line `index` (0-based).
fn line_offset(s: &str, index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    s.match_indices('\n')
        .nth(index - 1)
        .map_or(s.len(), |(i, _)| i + 1)
}

/// Returns the text of the first `# ` heading.
///
/// # Errors
/// [`PageError::MissingTitle`] when the document has no level-one heading;
/// callers usually fall back to [`title_from_filename`].
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    unwrap_surrounding_fence(markdown)
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(PageError::MissingTitle)
}

/// Derives a title from a file name.
///
/// `2024-05-01-my-first-post.md` becomes `My First Post`; any other name has
/// `-` and `_` turned into spaces and each word capitalised.
pub fn title_from_filename(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    let parts: Vec<&str> = stem.splitn(4, '-').collect();
    let words = match parts.as_slice() {
        [y, m, d, rest] if is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2) => *rest,
        _ => stem,
    };
    words
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn extract_simple_title() {
        assert_eq!(extract_title("# Hello\n\ntext").unwrap(), "Hello");
    }

    #[test]
    fn extract_title_skips_deeper_headings() {
        assert_eq!(
            extract_title("## Not this\n# This one  \n").unwrap(),
            "This one"
        );
    }

    #[test]
    fn missing_title_is_an_error() {
        assert!(matches!(
            extract_title("no heading here"),
            Err(PageError::MissingTitle)
        ));
    }

    #[test]
    fn title_inside_wrapping_fence() {
        let md = "\n````markdown\n# Wrapped\n\nbody\n````\n";
        assert_eq!(extract_title(md).unwrap(), "Wrapped");
    }

    #[test]
    fn unwrap_leaves_partial_fence_alone() {
        let md = "```\ncode\n```\n\nafter";
        assert_eq!(unwrap_surrounding_fence(md), md);
    }

    #[test]
    fn unwrap_returns_inner_lines() {
        assert_eq!(
            unwrap_surrounding_fence("```md\n# A\n\nb\n```"),
            "# A\n\nb"
        );
    }

    #[rstest]
    #[case("2024-05-01-my-first-post.md", "My First Post")]
    #[case("about_me.md", "About Me")]
    #[case("resume.md", "Resume")]
    #[case("2024-notes.md", "2024 Notes")]
    fn filename_titles(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(title_from_filename(name), expected);
    }
}
