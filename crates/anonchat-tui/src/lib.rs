//! anonchat-tui: Terminal front-end for anonchat
//!
//! This crate provides the TUI layer for anonchat, including:
//! - The chat layout (header, sidebar, message list, composer, footer)
//! - Key mapping from terminal events to composer keystrokes
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use layout::render_app;
pub use anonchat_core;

use anonchat_core::Config;
use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: usize = 3;

/// Tick rate of the event loop in milliseconds.
const TICK_RATE_MS: u64 = 250;

/// Errors from running the terminal UI.
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// RAII guard for terminal state restoration.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut out = stdout();
        if self.keyboard_enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            ShowCursor
        );
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop over a fresh conversation, and
/// restores the terminal on exit.
pub async fn run_tui(config: Config) -> Result<(), TuiError> {
    enable_raw_mode()?;
    // Without the enhancement protocol Shift+Enter is reported as plain Enter
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    let _guard = TerminalGuard { keyboard_enhanced };

    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!(
        conversation = %app.conversation.id(),
        keyboard_enhanced,
        "tui started"
    );

    let mut events = EventHandler::new(TICK_RATE_MS);
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), TuiError> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_app(app, area, frame.buffer_mut());
        })?;

        let Some(event) = events.next().await else {
            debug!("event channel closed");
            break;
        };

        match event {
            Event::Key(key) => app.handle_action(key_to_action(key)),
            Event::Paste(text) => app.handle_paste(text),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.list_state.scroll_up(WHEEL_ROWS),
                MouseEventKind::ScrollDown => app.list_state.scroll_down(WHEEL_ROWS),
                _ => {}
            },
            // Redrawn at the top of the loop
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }

    #[test]
    fn test_tui_error_display() {
        let err = TuiError::from(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert_eq!(err.to_string(), "terminal I/O failed: no tty");
    }
}
