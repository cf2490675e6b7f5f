//! Log preview helpers for prompts and model output.

use std::borrow::Cow;

/// Cut `s` to at most `max_bytes` on a char boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// One-line preview for log messages: newlines become `\n` and the text is
/// cut to `max_bytes` with a trailing `...` when anything was dropped.
pub fn preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    let cut = truncate_str(s, max_bytes);
    let truncated = cut.len() < s.len();

    if !truncated && !cut.contains(['\n', '\r']) {
        return Cow::Borrowed(cut);
    }

    let mut line = cut.replace("\r\n", "\\n").replace(['\n', '\r'], "\\n");
    if truncated {
        line.push_str("...");
    }
    Cow::Owned(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_char_boundary() {
        // "°F" is 3 bytes; cutting inside the degree sign backs up
        assert_eq!(truncate_str("58°F", 3), "58");
        assert_eq!(truncate_str("58°F", 4), "58°");
        assert_eq!(truncate_str("short", 10), "short");
    }

    #[test]
    fn test_preview_borrows_short_single_line() {
        assert!(matches!(preview("London", 20), Cow::Borrowed("London")));
    }

    #[test]
    fn test_preview_flattens_and_marks_cut() {
        assert_eq!(preview("line one\nline two", 100), "line one\\nline two");
        assert_eq!(preview("What is the weather", 7), "What is...");
        assert_eq!(preview("a\r\nb", 10), "a\\nb");
    }
}
