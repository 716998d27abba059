//! Message list widget.
//!
//! Renders the conversation as chat bubbles: sent messages hug the right
//! edge, received ones the left. Bubbles take at most 80% of the width and
//! are separated by one blank row. The view follows the newest message until
//! the user scrolls up.

use anonchat_core::Message;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::StatefulWidget,
};

use crate::text::{visual_width, wrap_text};
use crate::theme::Theme;

/// Scroll state of the message list.
#[derive(Debug, Clone, Default)]
pub struct MessageListState {
    /// Rows scrolled up from the bottom. Zero means following new messages.
    offset: usize,
    /// Largest valid offset, known after the last render.
    max_offset: usize,
    /// Visible rows at the last render.
    page: usize,
}

impl MessageListState {
    /// Create a state that follows the newest message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows scrolled up from the bottom.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the list sticks to the newest message.
    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.offset = (self.offset + rows).min(self.max_offset);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page.max(1));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = 0;
    }
}

/// One rendered row of a bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BubbleRow {
    x: usize,
    text: String,
    sent: bool,
}

/// Chat bubble list for a slice of messages.
pub struct MessageList<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
}

impl<'a> MessageList<'a> {
    /// Create a new message list widget.
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }

    /// Lay out every message for a given width. `None` rows are spacers.
    fn layout(&self, width: usize) -> Vec<Option<BubbleRow>> {
        let max_content = (width * 4 / 5).saturating_sub(2).max(1);
        let mut rows = Vec::new();

        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                rows.push(None);
            }

            let lines = wrap_text(&message.text, max_content);
            let content_width = lines
                .iter()
                .map(|l| visual_width(l))
                .max()
                .unwrap_or(0)
                .clamp(1, max_content);
            let bubble_width = content_width + 2;
            let x = if message.sent {
                width.saturating_sub(bubble_width)
            } else {
                0
            };

            for line in lines {
                let pad = content_width.saturating_sub(visual_width(&line));
                rows.push(Some(BubbleRow {
                    x,
                    text: format!(" {line}{} ", " ".repeat(pad)),
                    sent: message.sent,
                }));
            }
        }

        rows
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = usize::from(area.width);
        let height = usize::from(area.height);
        let rows = self.layout(width);

        state.page = height;
        state.max_offset = rows.len().saturating_sub(height);
        state.offset = state.offset.min(state.max_offset);

        let end = rows.len() - state.offset;
        let start = end.saturating_sub(height);

        let sent_style = Style::default()
            .fg(self.theme.sent_text)
            .bg(self.theme.sent_bg);
        let received_style = Style::default()
            .fg(self.theme.received_text)
            .bg(self.theme.received_bg);

        for (y, row) in (area.y..area.y + area.height).zip(&rows[start..end]) {
            let Some(row) = row else { continue };
            let x = area.x + u16::try_from(row.x).unwrap_or(0);
            let style = if row.sent { sent_style } else { received_style };
            buf.set_stringn(x, y, &row.text, width.saturating_sub(row.x), style);
        }
    }
}
