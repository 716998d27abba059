//! Help overlay listing the key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{BorderSet, Theme};

const HELP_TEXT: &str = "
  Composer
    Enter                   Send message
    Shift+Enter / Ctrl+J    New line
    Esc                     Clear draft / quit
    Ctrl+D                  Disable/enable input

  Messages
    Up/Down, PgUp/PgDn      Scroll
    Ctrl+End                Jump to newest

  F1 toggles this help, Ctrl+C quits
";

const HELP_WIDTH: u16 = 50;
const HELP_HEIGHT: u16 = 16;

/// Centered help box drawn over the rest of the UI.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self { theme, borders }
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay = centered_fixed(
            HELP_WIDTH.min(area.width.saturating_sub(4)),
            HELP_HEIGHT.min(area.height.saturating_sub(2)),
            area,
        );

        Clear.render(overlay, buf);

        let block = Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(self.theme.primary))
            .borders(Borders::ALL)
            .border_set(self.borders.focused())
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.overlay));

        Paragraph::new(HELP_TEXT)
            .block(block)
            .style(Style::default().fg(self.theme.text))
            .render(overlay, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_fixed(50, 16, area), Rect::new(15, 4, 50, 16));
        assert_eq!(centered_fixed(100, 30, area), area);
    }

    #[test]
    fn test_help_overlay_renders() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme, &borders).render(area, &mut buf);

        let out = buffer_to_string(&buf);
        assert!(out.contains("Help"));
        assert!(out.contains("Send message"));
        assert!(out.contains("Shift+Enter"));
        assert!(out.contains("Clear draft / quit"));
    }

    #[test]
    fn test_help_overlay_tiny_area() {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&theme, &borders).render(area, &mut buf);
    }
}
