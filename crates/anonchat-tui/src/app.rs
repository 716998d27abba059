//! Application state and update logic for the anonchat TUI.

use anonchat_core::{Composer, Config, Conversation};
use tracing::{debug, info};

use crate::event::Action;
use crate::theme::{no_color, BorderSet, GlyphMode, Theme};
use crate::widgets::{ChatEntry, MessageListState};

/// Rows scrolled per arrow key or mouse wheel tick.
pub const SCROLL_STEP: usize = 1;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The single conversation shown by this view.
    pub conversation: Conversation,
    /// Draft of the next outgoing message.
    pub composer: Composer,
    /// Effective configuration.
    pub config: Config,
    /// Theme colors.
    pub theme: Theme,
    /// Border set based on glyph mode.
    pub borders: BorderSet,
    /// Scroll state of the message list.
    pub list_state: MessageListState,
    /// Sidebar entries.
    pub sidebar: Vec<ChatEntry>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app for a fresh conversation, picking glyphs and colors
    /// from the environment.
    pub fn new(config: Config) -> Self {
        let glyphs = GlyphMode::from_env();
        let mut app = Self::with_conversation(config, Conversation::new(), glyphs);
        if no_color() {
            app.theme = Theme::monochrome();
        }
        app
    }

    /// Create the app around an existing conversation.
    pub fn with_conversation(config: Config, conversation: Conversation, glyphs: GlyphMode) -> Self {
        let sidebar = ChatEntry::placeholders(config.sidebar_entries);
        Self {
            conversation,
            composer: Composer::new(),
            theme: Theme::from_name(config.theme),
            borders: BorderSet::new(glyphs),
            list_state: MessageListState::new(),
            sidebar,
            config,
            show_help: false,
            should_quit: false,
        }
    }

    /// Deterministic app for tests: default config, sequential ids,
    /// Unicode glyphs.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        Self::with_conversation(
            Config::default(),
            Conversation::with_id_source(anonchat_core::SequentialIds::new()),
            GlyphMode::Unicode,
        )
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Help | Action::Back => self.show_help = false,
                _ => {}
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Back => {
                if self.composer.is_empty() || self.composer.is_disabled() {
                    self.should_quit = true;
                } else {
                    self.composer.clear();
                }
            }
            Action::ScrollUp => self.list_state.scroll_up(SCROLL_STEP),
            Action::ScrollDown => self.list_state.scroll_down(SCROLL_STEP),
            Action::PageUp => self.list_state.page_up(),
            Action::PageDown => self.list_state.page_down(),
            Action::ScrollToBottom => self.list_state.scroll_to_bottom(),
            Action::ToggleDisabled => {
                let disabled = !self.composer.is_disabled();
                self.composer.set_disabled(disabled);
                debug!(disabled, "composer toggled");
            }
            Action::Compose(key) => {
                if self.composer.press(key, &mut self.conversation) {
                    self.list_state.scroll_to_bottom();
                }
            }
            Action::None => {}
        }

        if self.should_quit {
            info!(
                conversation = %self.conversation.id(),
                messages = self.conversation.len(),
                "quitting"
            );
        }
    }

    /// Handle pasted text.
    pub fn handle_paste(&mut self, text: String) {
        self.handle_action(Action::Compose(anonchat_core::Keystroke::Paste(text)));
    }

    /// Type a string into the composer, one key at a time.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            let action = if c == '\n' {
                Action::Compose(anonchat_core::Keystroke::Confirm { extend: true })
            } else {
                Action::Compose(anonchat_core::Keystroke::Char(c))
            };
            self.handle_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anonchat_core::{Keystroke, SEED_MESSAGES};

    fn confirm() -> Action {
        Action::Compose(Keystroke::Confirm { extend: false })
    }

    #[test]
    fn test_new_app_has_seeded_conversation() {
        let app = App::new_for_test();
        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.sidebar.len(), 3);
        assert!(app.composer.is_empty());
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_and_enter_appends() {
        let mut app = App::new_for_test();
        app.type_str("a");
        app.handle_action(confirm());
        app.type_str("b");
        app.handle_action(confirm());

        let texts: Vec<_> = app
            .conversation
            .iter()
            .map(|m| (m.text.as_str(), m.sent))
            .collect();
        assert_eq!(
            texts,
            vec![
                (SEED_MESSAGES[0], false),
                (SEED_MESSAGES[1], false),
                ("a", true),
                ("b", true),
            ]
        );
        assert!(app.composer.is_empty());
    }

    #[test]
    fn test_enter_on_blank_draft_does_nothing() {
        let mut app = App::new_for_test();
        app.type_str("   ");
        app.handle_action(confirm());
        assert_eq!(app.conversation.len(), 2);
        assert_eq!(app.composer.draft(), "   ");
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut app = App::new_for_test();
        app.type_str("line one");
        app.handle_action(Action::Compose(Keystroke::Confirm { extend: true }));
        app.type_str("line two");
        assert_eq!(app.conversation.len(), 2);

        app.handle_action(confirm());
        assert_eq!(app.conversation.last().unwrap().text, "line one\nline two");
    }

    #[test]
    fn test_disabled_composer_ignores_input() {
        let mut app = App::new_for_test();
        app.type_str("draft");
        app.handle_action(Action::ToggleDisabled);
        assert!(app.composer.is_disabled());

        app.type_str("more");
        app.handle_action(confirm());
        assert_eq!(app.composer.draft(), "draft");
        assert_eq!(app.conversation.len(), 2);

        app.handle_action(Action::ToggleDisabled);
        app.handle_action(confirm());
        assert_eq!(app.conversation.len(), 3);
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = App::new_for_test();
        app.type_str("oops");
        app.handle_action(Action::Back);
        assert!(app.composer.is_empty());
        assert!(!app.should_quit);

        app.handle_action(Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_toggle_swallows_input() {
        let mut app = App::new_for_test();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.type_str("x");
        assert!(app.composer.is_empty());

        app.handle_action(Action::Back);
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_with_help_open() {
        let mut app = App::new_for_test();
        app.show_help = true;
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_goes_into_draft() {
        let mut app = App::new_for_test();
        app.handle_paste("pasted\r\ntext".to_string());
        assert_eq!(app.composer.draft(), "pasted\ntext");
        assert_eq!(app.conversation.len(), 2);
    }

    #[test]
    fn test_send_returns_to_bottom() {
        let mut app = App::new_for_test();
        for i in 0..20 {
            app.type_str(&format!("message {i}"));
            app.handle_action(confirm());
        }
        // Scrolling needs a render to learn the bounds
        crate::test_utils::render_app_to_string(&mut app, 80, 24);
        app.handle_action(Action::PageUp);
        assert!(!app.list_state.is_following());

        app.type_str("newest");
        app.handle_action(confirm());
        assert!(app.list_state.is_following());
    }

    #[test]
    fn test_action_none_does_nothing() {
        let mut app = App::new_for_test();
        app.handle_action(Action::None);
        assert_eq!(app.conversation.len(), 2);
        assert!(!app.should_quit);
    }
}
