use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending with `...`
/// when anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut width = 0;
    let mut truncated = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate_string("日本語の単語", 7), "日本...");
    }

    #[test]
    fn test_truncate_tiny_width() {
        assert_eq!(truncate_string("Hello", 2), "..");
        assert_eq!(truncate_string("Hello", 0), "");
    }
}
