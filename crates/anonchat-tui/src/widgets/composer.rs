//! Composer widget: the bordered, multi-line message entry box.
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │ Type your message anonymously...   ➤ │
//! ╰──────────────────────────────────────╯
//!      Press Enter to send · Shift+Enter for a new line
//! ```

use anonchat_core::Composer;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use unicode_width::UnicodeWidthChar;

use crate::theme::{BorderSet, Theme};

/// Hint rendered under the box.
pub const SEND_HINT: &str = "Press Enter to send · Shift+Enter for a new line";

/// Columns reserved on the right for the send indicator.
const SEND_COLUMNS: u16 = 2;

/// Composer widget rendering a [`Composer`]'s draft.
pub struct ComposerWidget<'a> {
    composer: &'a Composer,
    theme: &'a Theme,
    borders: &'a BorderSet,
    placeholder: &'a str,
}

impl<'a> ComposerWidget<'a> {
    /// Create a new composer widget.
    pub fn new(composer: &'a Composer, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            composer,
            theme,
            borders,
            placeholder: "",
        }
    }

    /// Set the placeholder shown while the draft is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Total height for a widget `width` columns wide: visible draft rows,
    /// borders and the hint row.
    pub fn height(composer: &Composer, width: u16, max_lines: u16) -> u16 {
        let rows = if composer.is_empty() {
            1
        } else {
            let (rows, _) = wrap_draft(
                composer,
                usize::from(text_width(width)),
                !composer.is_disabled(),
            );
            rows.len()
        };
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .clamp(1, max_lines.max(1))
            + 3
    }

    /// Build the visible rows with the cursor drawn in.
    /// Returns the rows and the index of the row holding the cursor.
    fn draft_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let text_style = Style::default().fg(self.theme.text);
        let cursor = Span::styled(
            self.borders.cursor_glyph(),
            Style::default().fg(self.theme.primary),
        );
        let show_cursor = !self.composer.is_disabled();

        if self.composer.is_empty() {
            let mut spans = Vec::new();
            if show_cursor {
                spans.push(cursor);
            }
            spans.push(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(self.theme.muted),
            ));
            return (vec![Line::from(spans)], 0);
        }

        let (rows, cursor_row) = wrap_draft(self.composer, width, show_cursor);
        let lines = rows
            .iter()
            .map(|row| row_to_line(row, text_style, &cursor))
            .collect();
        (lines, cursor_row)
    }
}

/// Columns available for draft text in a widget `width` columns wide.
fn text_width(width: u16) -> u16 {
    width.saturating_sub(2 + SEND_COLUMNS)
}

/// One cell of a wrapped draft row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Char(char),
    Cursor,
}

/// Soft-wrap the draft into rows of at most `width` cells, keeping explicit
/// line breaks. Returns the rows and the row holding the cursor.
fn wrap_draft(composer: &Composer, width: usize, show_cursor: bool) -> (Vec<Vec<Cell>>, usize) {
    let width = width.max(1);
    let (cursor_line, cursor_col) = composer.cursor_position();
    let mut rows = Vec::new();
    let mut cursor_row = 0;

    for (idx, line) in composer.draft().split('\n').enumerate() {
        let mut cells: Vec<Cell> = line.chars().map(Cell::Char).collect();
        if show_cursor && idx == cursor_line {
            cells.insert(cursor_col.min(cells.len()), Cell::Cursor);
        }
        let len = cells.len();

        let mut row = Vec::new();
        let mut used = 0;
        for (pos, cell) in cells.into_iter().enumerate() {
            let w = match cell {
                Cell::Char(c) => c.width().unwrap_or(0),
                Cell::Cursor => 1,
            };
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            if idx == cursor_line && pos == cursor_col {
                cursor_row = rows.len();
            }
            row.push(cell);
            used += w;
        }
        // Cursor past the last character of its line
        if idx == cursor_line && cursor_col >= len {
            cursor_row = rows.len();
        }
        rows.push(row);
    }

    (rows, cursor_row)
}

fn row_to_line(row: &[Cell], text_style: Style, cursor: &Span<'static>) -> Line<'static> {
    let mut spans = Vec::new();
    let mut text = String::new();
    for cell in row {
        match cell {
            Cell::Char(c) => text.push(*c),
            Cell::Cursor => {
                if !text.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut text), text_style));
                }
                spans.push(cursor.clone());
            }
        }
    }
    if !text.is_empty() {
        spans.push(Span::styled(text, text_style));
    }
    Line::from(spans)
}

impl Widget for ComposerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Hint row only when there is room for the box as well
        let (box_area, hint_area) = if area.height >= 4 {
            let box_area = Rect::new(area.x, area.y, area.width, area.height - 1);
            let hint_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            (box_area, Some(hint_area))
        } else {
            (area, None)
        };

        let disabled = self.composer.is_disabled();
        let (border_set, border_color) = if disabled {
            (self.borders.normal(), self.theme.muted)
        } else {
            (self.borders.focused(), self.theme.border_focused)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.surface));
        if disabled {
            block = block
                .title(" disabled ")
                .title_style(Style::default().fg(self.theme.muted));
        }

        let inner = block.inner(box_area);
        block.render(box_area, buf);

        if inner.width > SEND_COLUMNS && inner.height > 0 {
            let text_area = Rect::new(
                inner.x,
                inner.y,
                inner.width - SEND_COLUMNS,
                inner.height,
            );

            let (lines, cursor_row) = self.draft_lines(usize::from(text_area.width));
            let visible = usize::from(text_area.height);
            let scroll = cursor_row.saturating_sub(visible.saturating_sub(1));
            Paragraph::new(lines)
                .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
                .render(text_area, buf);

            let send_style = if self.composer.can_send() {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            buf.set_string(
                inner.x + inner.width - 1,
                inner.y + inner.height - 1,
                self.borders.send_glyph(),
                send_style,
            );
        }

        if let Some(hint_area) = hint_area {
            Paragraph::new(SEND_HINT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.muted))
                .render(hint_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use anonchat_core::Keystroke;

    fn render(composer: &Composer, width: u16, height: u16) -> (String, Buffer) {
        let theme = Theme::default();
        let borders = BorderSet::default();
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ComposerWidget::new(composer, &theme, &borders)
            .placeholder("Type your message anonymously...")
            .render(area, &mut buf);
        (buffer_to_string(&buf), buf)
    }

    #[test]
    fn test_height_grows_with_lines_up_to_max() {
        let mut composer = Composer::new();
        assert_eq!(ComposerWidget::height(&composer, 40, 5), 4);

        composer.update_draft("a\nb\nc");
        assert_eq!(ComposerWidget::height(&composer, 40, 5), 6);

        composer.update_draft("1\n2\n3\n4\n5\n6\n7");
        assert_eq!(ComposerWidget::height(&composer, 40, 5), 8);
    }

    #[test]
    fn test_empty_shows_placeholder_and_hint() {
        let composer = Composer::new();
        let (out, _) = render(&composer, 60, 4);
        assert!(out.contains("█Type your message anonymously..."));
        assert!(out.contains("Press Enter to send"));
        assert!(out.contains("➤"));
    }

    #[test]
    fn test_draft_with_cursor() {
        let mut composer = Composer::new();
        composer.update_draft("hello");
        composer.press(Keystroke::Left, &mut |_: String| {});
        let (out, _) = render(&composer, 40, 4);
        assert!(out.contains("hell█o"));
        assert!(!out.contains("Type your message"));
    }

    #[test]
    fn test_multiline_draft_renders_each_line() {
        let mut composer = Composer::new();
        composer.update_draft("first\nsecond");
        let height = ComposerWidget::height(&composer, 40, 5);
        let (out, _) = render(&composer, 40, height);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("first"));
        assert!(lines[2].contains("second█"));
    }

    #[test]
    fn test_send_indicator_reflects_can_send() {
        let theme = Theme::default();
        let mut composer = Composer::new();
        composer.update_draft("   ");
        let (_, buf) = render(&composer, 30, 4);
        // Indicator sits in the last inner column of the box
        assert_eq!(buf[(28, 1)].symbol(), "➤");
        assert_eq!(buf[(28, 1)].fg, theme.muted);

        composer.update_draft("go");
        let (_, buf) = render(&composer, 30, 4);
        assert_eq!(buf[(28, 1)].fg, theme.accent);
    }

    #[test]
    fn test_disabled_hides_cursor() {
        let mut composer = Composer::new();
        composer.set_disabled(true);
        let (out, _) = render(&composer, 60, 4);
        assert!(out.contains("disabled"));
        assert!(!out.contains('█'));
    }

    #[test]
    fn test_long_line_wraps_and_grows() {
        let mut composer = Composer::new();
        composer.update_draft("aaaaaaaaaa bbbbbbbbbb cccccccccc ENDMARK");
        // 20 text columns: 40 characters plus the cursor take three rows
        let height = ComposerWidget::height(&composer, 24, 5);
        assert_eq!(height, 6);

        let (out, _) = render(&composer, 24, height);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "┃aaaaaaaaaa bbbbbbbbb  ┃");
        assert_eq!(lines[2], "┃b cccccccccc ENDMARK  ┃");
        // Cursor on its own row, send indicator in the bottom-right corner
        assert_eq!(lines[3], format!("┃█{}➤┃", " ".repeat(20)));
    }

    #[test]
    fn test_wrapped_draft_scrolls_to_cursor() {
        let mut composer = Composer::new();
        composer.update_draft("aaaaaaaaaa bbbbbbbbbb cccccccccc END");
        assert_eq!(ComposerWidget::height(&composer, 24, 1), 4);

        // One visible row: the one holding the cursor
        let (out, _) = render(&composer, 24, 4);
        assert!(out.contains("b cccccccccc END█"));
        assert!(!out.contains("aaaa"));

        composer.press(Keystroke::Home, &mut |_: String| {});
        let (out, _) = render(&composer, 24, 4);
        assert!(out.contains("█aaaaaaaaaa"));
        assert!(!out.contains("END"));
    }

    #[test]
    fn test_disabled_height_ignores_cursor() {
        let mut composer = Composer::new();
        // Exactly one row of text; the cursor would start a second row
        composer.update_draft("x".repeat(20));
        assert_eq!(ComposerWidget::height(&composer, 24, 5), 5);
        composer.set_disabled(true);
        assert_eq!(ComposerWidget::height(&composer, 24, 5), 4);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let composer = Composer::new();
        render(&composer, 3, 1);
        render(&composer, 1, 3);
    }
}
