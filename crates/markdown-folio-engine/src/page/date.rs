use std::sync::OnceLock;

use regex::Regex;

fn page_date_regex() -> &'static Regex {
    static PAGE_DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    PAGE_DATE_REGEX.get_or_init(|| {
        Regex::new(r"<!--\s*page-date:\s*(\d{4}-\d{2}-\d{2})\s*-->").expect("Invalid page date regex")
    })
}

fn leading_date_regex() -> &'static Regex {
    static LEADING_DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    LEADING_DATE_REGEX
        .get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").expect("Invalid leading date regex"))
}

/// Returns the date from a `<!-- page-date: YYYY-MM-DD -->` comment.
pub fn extract_page_date(markdown: &str) -> Option<String> {
    page_date_regex()
        .captures(markdown)
        .map(|caps| caps[1].to_string())
}

/// Returns a leading `YYYY-MM-DD` from a file name such as `2024-05-01-post.md`.
pub fn date_from_filename(file_name: &str) -> Option<String> {
    leading_date_regex()
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}

/// Inserts a page-date comment ahead of the first content line.
///
/// Leading comment blocks and heading lines are skipped so the stamp lands
/// after them; everything else is left byte-for-byte intact.
pub fn inject_page_date(markdown: &str, date: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut insert_pos = 0;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.starts_with("<!--") {
            match lines[i..].iter().position(|l| l.contains("-->")) {
                Some(rel) => {
                    i += rel;
                    insert_pos = i + 1;
                }
                None => break,
            }
        } else if !line.is_empty() && !line.starts_with('#') {
            break;
        }
        i += 1;
    }

    let comment = format!("<!-- page-date: {date} -->");
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    out.extend_from_slice(&lines[..insert_pos]);
    out.push(&comment);
    out.extend_from_slice(&lines[insert_pos..]);
    out.join("\n")
}
