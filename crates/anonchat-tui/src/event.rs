//! Event handling for the anonchat TUI.

use anonchat_core::Keystroke;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Text was pasted (bracketed paste).
    Paste(String),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm uses blocking I/O, so poll on a dedicated thread
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            // Ignore key releases on terminals that report them
                            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Action the app performs in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the app.
    Quit,
    /// Toggle the help overlay.
    Help,
    /// Clear the draft, close help, or quit when there is nothing to close.
    Back,
    /// Scroll the message list by one line.
    ScrollUp,
    ScrollDown,
    /// Scroll the message list by one page.
    PageUp,
    PageDown,
    /// Jump back to the newest message.
    ScrollToBottom,
    /// Toggle the composer's disabled flag.
    ToggleDisabled,
    /// Forward a key press to the composer.
    Compose(Keystroke),
    None,
}

/// Convert a key event to an action.
///
/// `Enter` confirms. `Shift+Enter` and `Alt+Enter` confirm with the extend
/// modifier; `Ctrl+J` does the same on terminals that cannot report
/// modified Enter.
pub fn key_to_action(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let extend = key
        .modifiers
        .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);

    if ctrl {
        return match key.code {
            KeyCode::Char('c' | 'q') => Action::Quit,
            KeyCode::Char('d') => Action::ToggleDisabled,
            KeyCode::Char('j') => Action::Compose(Keystroke::Confirm { extend: true }),
            KeyCode::End => Action::ScrollToBottom,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter => Action::Compose(Keystroke::Confirm { extend }),
        KeyCode::Char(c) => Action::Compose(Keystroke::Char(c)),
        KeyCode::Backspace => Action::Compose(Keystroke::Backspace),
        KeyCode::Delete => Action::Compose(Keystroke::Delete),
        KeyCode::Left => Action::Compose(Keystroke::Left),
        KeyCode::Right => Action::Compose(Keystroke::Right),
        KeyCode::Home => Action::Compose(Keystroke::Home),
        KeyCode::End => Action::Compose(Keystroke::End),
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Esc => Action::Back,
        KeyCode::F(1) => Action::Help,
        _ => Action::None,
    }
}
