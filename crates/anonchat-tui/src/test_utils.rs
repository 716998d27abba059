//! Test utilities for anonchat-tui rendering tests.
//!
//! Helpers for creating test terminals, rendering the app and converting
//! buffers to strings.

pub use crate::headless::buffer_to_string;

use crate::app::App;
use crate::layout::render_app;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Render the app into a `width` x `height` buffer and return it as text.
pub fn render_app_to_string(app: &mut App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }

    #[test]
    fn test_terminal_draw_matches_buffer_render() {
        let mut terminal = create_test_terminal();
        let mut app = App::new_for_test();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_app(&mut app, area, frame.buffer_mut());
            })
            .unwrap();

        let drawn = buffer_to_string(terminal.backend().buffer());
        let mut again = App::new_for_test();
        assert_eq!(drawn, render_app_to_string(&mut again, TEST_WIDTH, TEST_HEIGHT));
    }
}
