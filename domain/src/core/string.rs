//! String utilities for the domain layer.

/// Single-line preview of a message for log output (UTF-8 safe)
///
/// Collapses runs of whitespace (including newlines) into single spaces and
/// cuts the result at `max_chars` characters, appending `...` when cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = collapsed.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("line one\n\n  line two", 40), "line one line two");
    }

    #[test]
    fn test_preview_cuts_long_text() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("日本語テスト文字列", 6), "日本語...");
        assert_eq!(preview("👋🌍🎉", 3), "👋🌍🎉");
    }
}
