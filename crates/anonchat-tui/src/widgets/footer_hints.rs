//! Footer bar: conversation status on the left, key hints on the right.
//!
//! Format: `4 messages │ scrolled            [Enter] send │ [F1] help`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "Ctrl+C").
    pub key: String,
    /// The action description (e.g., "send", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the current composer state.
pub fn composer_hints(disabled: bool) -> Vec<KeyHint> {
    if disabled {
        vec![
            KeyHint::new("Ctrl+D", "enable"),
            KeyHint::new("F1", "help"),
            KeyHint::new("Esc", "quit"),
        ]
    } else {
        vec![
            KeyHint::new("Enter", "send"),
            KeyHint::new("Shift+Enter", "newline"),
            KeyHint::new("F1", "help"),
            KeyHint::new("Esc", "clear/quit"),
        ]
    }
}

/// Footer widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    message_count: Option<usize>,
    following: bool,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            message_count: None,
            following: true,
        }
    }

    /// Show the number of messages in the conversation.
    #[must_use]
    pub fn message_count(mut self, count: usize) -> Self {
        self.message_count = Some(count);
        self
    }

    /// Whether the message list follows new messages.
    #[must_use]
    pub fn following(mut self, following: bool) -> Self {
        self.following = following;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = || Span::styled(" │ ", Style::default().fg(self.theme.muted));
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(count) = self.message_count {
            let noun = if count == 1 { "message" } else { "messages" };
            left_spans.push(Span::styled(
                format!("{count} {noun}"),
                Style::default().fg(self.theme.subtext),
            ));
        }

        if !self.following {
            if !left_spans.is_empty() {
                left_spans.push(separator());
            }
            left_spans.push(Span::styled(
                "scrolled",
                Style::default().fg(self.theme.primary),
            ));
        }

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(separator());
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.clone(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.clone(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right_spans.iter().map(|s| visual_width(&s.content)).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use insta::assert_snapshot;

    fn render(footer: FooterHints<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_composer_hints_depend_on_disabled() {
        assert_eq!(composer_hints(false)[0], KeyHint::new("Enter", "send"));
        assert_eq!(composer_hints(true)[0], KeyHint::new("Ctrl+D", "enable"));
    }

    #[test]
    fn test_footer_layout() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("Enter", "send"), KeyHint::new("F1", "help")];
        let footer = FooterHints::new(&hints, &theme).message_count(4);
        assert_snapshot!(render(footer, 40), @"4 messages      [Enter] send │ [F1] help");
    }

    #[test]
    fn test_footer_scrolled_marker() {
        let theme = Theme::default();
        let footer = FooterHints::new(&[], &theme)
            .message_count(1)
            .following(false);
        assert_snapshot!(render(footer, 30), @"1 message │ scrolled");
    }
}
