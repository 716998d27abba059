//! "Active Chats" sidebar.
//!
//! Lists placeholder chat entries; there is no directory of real peers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::{BorderSet, Theme};

/// Preview line shown under every entry.
const PREVIEW: &str = "Last message content...";

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub name: String,
    pub preview: String,
}

impl ChatEntry {
    /// Placeholder entries `Anonymous User #1..=count`.
    pub fn placeholders(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|i| Self {
                name: format!("Anonymous User #{i}"),
                preview: PREVIEW.to_string(),
            })
            .collect()
    }
}

/// Sidebar widget.
pub struct Sidebar<'a> {
    entries: &'a [ChatEntry],
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Sidebar<'a> {
    /// Create a new sidebar widget.
    pub fn new(entries: &'a [ChatEntry], theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            entries,
            theme,
            borders,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Active Chats ")
            .title_style(
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_set(self.borders.normal())
            .border_style(Style::default().fg(self.theme.border));

        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width.saturating_sub(1));
        let mut lines = Vec::with_capacity(self.entries.len() * 3);
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", truncate_to_width(&entry.name, width)),
                Style::default().fg(self.theme.text),
            )));
            lines.push(Line::from(Span::styled(
                format!(" {}", truncate_to_width(&entry.preview, width)),
                Style::default().fg(self.theme.muted),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_placeholders() {
        let entries = ChatEntry::placeholders(3);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "Anonymous User #1");
        assert_eq!(entries[2].name, "Anonymous User #3");
        assert!(ChatEntry::placeholders(0).is_empty());
    }

    #[test]
    fn test_sidebar_renders_entries() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let entries = ChatEntry::placeholders(2);
        let area = Rect::new(0, 0, 28, 8);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&entries, &theme, &borders).render(area, &mut buf);

        let out = buffer_to_string(&buf);
        assert!(out.contains("Active Chats"));
        assert!(out.contains("Anonymous User #1"));
        assert!(out.contains("Anonymous User #2"));
        assert!(out.contains("Last message content..."));
    }

    #[test]
    fn test_narrow_sidebar_truncates() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let entries = ChatEntry::placeholders(1);
        let area = Rect::new(0, 0, 12, 5);
        let mut buf = Buffer::empty(area);
        Sidebar::new(&entries, &theme, &borders).render(area, &mut buf);

        assert!(buffer_to_string(&buf).contains(" Anonymou…"));
    }
}
