//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast, monochrome)
//! - [`BorderSet`] - Border characters and glyphs with ASCII fallback

mod borders;
mod colors;

pub use borders::{no_color, BorderSet, GlyphMode};
pub use colors::Theme;
