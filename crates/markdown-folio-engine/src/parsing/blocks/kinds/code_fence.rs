/// Signature of a line that opens or closes a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Info string after the backticks on an opening line (`rust` in ```` ```rust ````).
    pub info: Option<String>,
}

/// Fenced code block type with owned delimiter constant.
///
/// Only backtick fences are recognised. Any line whose stripped text starts
/// with three backticks toggles fence state, whatever follows the marker.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence signature if `stripped` starts with a fence marker.
    pub fn sig(stripped: &str) -> Option<FenceSig> {
        let rest = stripped.strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_start_matches('`').trim();
        Some(FenceSig {
            info: (!info.is_empty()).then(|| info.to_string()),
        })
    }

    /// Returns the interior lines of a fenced block's text, without the fence lines.
    ///
    /// `closed` says whether the last line is a closing fence that should be dropped.
    pub fn body(text: &str, closed: bool) -> String {
        let mut lines: Vec<&str> = text.split('\n').skip(1).collect();
        if closed {
            lines.pop();
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig { info: None }));
    }

    #[test]
    fn detect_fence_with_info() {
        assert_eq!(
            CodeFence::sig("```rust"),
            Some(FenceSig {
                info: Some("rust".to_string())
            })
        );
    }

    #[test]
    fn longer_backtick_run_is_still_a_fence() {
        assert_eq!(
            CodeFence::sig("````markdown"),
            Some(FenceSig {
                info: Some("markdown".to_string())
            })
        );
    }

    #[test]
    fn tildes_are_not_fences() {
        assert_eq!(CodeFence::sig("~~~"), None);
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``inline``"), None);
    }

    #[test]
    fn body_drops_fence_lines() {
        assert_eq!(CodeFence::body("```\na\n\n  b\n```", true), "a\n\n  b");
    }

    #[test]
    fn body_of_unclosed_fence_keeps_last_line() {
        assert_eq!(CodeFence::body("```\na\nb", false), "a\nb");
    }
}
