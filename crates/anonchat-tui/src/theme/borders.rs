//! Border sets and glyphs for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` environment variable by using ASCII borders.

use ratatui::symbols::border;

/// Unfocused ASCII borders.
const ASCII_NORMAL: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Focused ASCII borders.
const ASCII_FOCUSED: border::Set = border::Set {
    horizontal_top: "=",
    horizontal_bottom: "=",
    ..ASCII_NORMAL
};

/// Whether the user asked for no color via `NO_COLOR`.
pub fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Glyph mode for borders and indicator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Standard Unicode box drawing and symbols.
    #[default]
    Unicode,
    /// ASCII borders and indicator glyphs (used with `NO_COLOR`).
    Ascii,
}

impl GlyphMode {
    /// Pick the mode from the environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        if no_color() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Border set based on glyph mode.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: GlyphMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Normal (unfocused) borders - rounded for Unicode, `+-|` for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::ROUNDED,
            GlyphMode::Ascii => ASCII_NORMAL,
        }
    }

    /// Focused borders - thick for Unicode, `+=|` for ASCII.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::THICK,
            GlyphMode::Ascii => ASCII_FOCUSED,
        }
    }

    /// Send indicator shown in the composer.
    pub fn send_glyph(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "➤",
            GlyphMode::Ascii => ">",
        }
    }

    /// Live indicator shown in the header.
    pub fn live_glyph(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "●",
            GlyphMode::Ascii => "*",
        }
    }

    /// Cursor drawn inside the composer.
    pub fn cursor_glyph(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "█",
            GlyphMode::Ascii => "_",
        }
    }
}
