//! Header bar for the top of the TUI.
//!
//! Format: `● Live Chat                                   AnonChat`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::{BorderSet, Theme};

/// Brand shown at the right edge.
pub const BRAND: &str = "AnonChat";

/// Header widget.
pub struct Header<'a> {
    title: &'a str,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Header<'a> {
    /// Create a new header widget.
    pub fn new(title: &'a str, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title,
            theme,
            borders,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(self.borders.live_glyph(), Style::default().fg(self.theme.live)),
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        let used: usize = spans.iter().map(|s| visual_width(&s.content)).sum();
        let padding = usize::from(area.width).saturating_sub(used + BRAND.len());
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(BRAND, Style::default().fg(self.theme.accent)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::GlyphMode;
    use insta::assert_snapshot;

    fn render(borders: &BorderSet, width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        Header::new("Live Chat", &theme, borders).render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_header_unicode() {
        let borders = BorderSet::new(GlyphMode::Unicode);
        assert_snapshot!(render(&borders, 30), @"● Live Chat           AnonChat");
    }

    #[test]
    fn test_header_ascii() {
        let borders = BorderSet::new(GlyphMode::Ascii);
        assert_snapshot!(render(&borders, 30), @"* Live Chat           AnonChat");
    }

    #[test]
    fn test_narrow_header_drops_brand() {
        let borders = BorderSet::default();
        assert_eq!(render(&borders, 12), "● Live Chat");
    }
}
