//! Main chat layout.
//!
//! Regions:
//! 1. Header (top, 1 line)
//! 2. Sidebar (left, fixed width, only on wide terminals)
//! 3. Chat section: message list above the composer
//! 4. Footer hints (bottom, 1 line)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::app::App;
use crate::widgets::{
    composer_hints, ComposerWidget, FooterHints, Header, HelpOverlay, MessageList, Sidebar,
};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 30;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;
/// Below this width the sidebar is hidden.
pub const SIDEBAR_BREAKPOINT: u16 = 80;
/// Sidebar width in columns.
pub const SIDEBAR_WIDTH: u16 = 28;

/// Title of the chat section.
const CHAT_TITLE: &str = "Live Chat";

/// Render the whole app into `buf`.
pub fn render_app(app: &mut App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Main area (expands)
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    Header::new(CHAT_TITLE, &app.theme, &app.borders).render(chunks[0], buf);

    let chat_area = if app.config.show_sidebar && area.width >= SIDEBAR_BREAKPOINT {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        Sidebar::new(&app.sidebar, &app.theme, &app.borders).render(columns[0], buf);
        columns[1]
    } else {
        chunks[1]
    };

    render_chat(app, chat_area, buf);

    let hints = composer_hints(app.composer.is_disabled());
    FooterHints::new(&hints, &app.theme)
        .message_count(app.conversation.len())
        .following(app.list_state.is_following())
        .render(chunks[2], buf);

    if app.show_help {
        HelpOverlay::new(&app.theme, &app.borders).render(area, buf);
    }
}

/// Render the chat section: bordered message list with the composer below.
fn render_chat(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(app.borders.normal())
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.base));
    let inner = block.inner(area);
    block.render(area, buf);

    let composer_height =
        ComposerWidget::height(&app.composer, inner.width, app.config.composer_max_lines)
            .min(inner.height.saturating_sub(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(composer_height)])
        .split(inner);

    let list_area = rows[0].inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    MessageList::new(app.conversation.messages(), &app.theme).render(
        list_area,
        buf,
        &mut app.list_state,
    );

    ComposerWidget::new(&app.composer, &app.theme, &app.borders)
        .placeholder(&app.config.placeholder)
        .render(rows[1], buf);
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small ({}x{}). Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}.",
        area.width, area.height
    );
    Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.text).bg(app.theme.base))
        .render(area, buf);
}
