//! anonchat-core: Headless chat session core
//!
//! This crate provides the state behind the anonchat UI:
//! - [`Composer`] - draft editing and the submit gate
//! - [`Conversation`] - the append-only message sequence
//! - [`IdSource`] - collision-free message ids
//! - [`Config`] - user configuration

pub mod composer;
pub mod config;
pub mod conversation;
pub mod ids;
pub mod message;

// Re-export commonly used types
pub use composer::{Composer, Keystroke, SendHandler};
pub use config::{Config, ConfigError, ThemeName};
pub use conversation::{Conversation, SEED_MESSAGES};
pub use ids::{IdSource, ProcessIds, SequentialIds};
pub use message::{Message, MessageId};

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
