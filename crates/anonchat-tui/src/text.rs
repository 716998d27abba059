//! Text measuring and wrapping for message bubbles.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visual width of a string in terminal cells (wide characters count as 2).
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Wrap message text to `width` cells.
///
/// Explicit line breaks are kept, including empty lines, so a multi-line
/// draft renders with the shape it was typed in.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    text.split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(std::borrow::Cow::into_owned)
                    .collect()
            }
        })
        .collect()
}

/// Truncate to at most `max_width` cells, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width("你好"), 4);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_wrap_short_text_is_untouched() {
        assert_eq!(wrap_text("hello", 20), vec!["hello"]);
    }

    #[test]
    fn test_wrap_long_text() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| visual_width(l) <= 10));
    }

    #[test]
    fn test_wrap_keeps_line_breaks() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("Last message content...", 10), "Last mess…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
