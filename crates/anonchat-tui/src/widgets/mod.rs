//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`Header`] - Top bar with the live indicator
//! - [`Sidebar`] - "Active Chats" list
//! - [`MessageList`] - Chat bubbles with scroll state
//! - [`ComposerWidget`] - Message entry box
//! - [`FooterHints`] - Bottom status and keybinding hints
//! - [`HelpOverlay`] - Key binding reference

mod composer;
mod footer_hints;
mod header;
mod help;
mod message_list;
mod sidebar;

pub use composer::{ComposerWidget, SEND_HINT};
pub use footer_hints::{composer_hints, FooterHints, KeyHint};
pub use header::{Header, BRAND};
pub use help::{centered_fixed, HelpOverlay};
pub use message_list::{MessageList, MessageListState};
pub use sidebar::{ChatEntry, Sidebar};
