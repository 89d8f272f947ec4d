/// Line prefixes that never start an excerpt: headings, images, lists,
/// blockquotes, bare links and raw HTML.
const SKIPPED_PREFIXES: [char; 7] = ['#', '!', '-', '*', '>', '[', '<'];

/// Returns the first prose line of a document, whitespace collapsed and
/// truncated to `max_len` characters with a trailing `…`.
///
/// Expects comments to be stripped already.
pub fn first_paragraph(markdown: &str, max_len: usize) -> Option<String> {
    let line = markdown
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with(SKIPPED_PREFIXES))?;

    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > max_len {
        let mut truncated: String = collapsed.chars().take(max_len).collect();
        truncated.push('…');
        Some(truncated)
    } else {
        Some(collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_headings_and_lists() {
        let md = "# Title\n\n- item\n![img](a.png)\n\nFirst   real\tline.\nSecond.";
        assert_eq!(first_paragraph(md, 100), Some("First real line.".into()));
    }

    #[test]
    fn truncates_long_lines() {
        assert_eq!(first_paragraph("abcdefgh", 5), Some("abcde…".into()));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(first_paragraph("ééééé", 5), Some("ééééé".into()));
    }

    #[test]
    fn no_prose_line() {
        assert_eq!(first_paragraph("# Only a heading\n\n> quote", 10), None);
    }
}
