//! Catppuccin color palettes for the TUI.

use anonchat_core::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub accent: Color,

    // Live indicator
    pub live: Color,

    // Message bubbles
    pub sent_bg: Color,
    pub sent_text: Color,
    pub received_bg: Color,
    pub received_text: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244
            overlay: Color::Rgb(69, 71, 90),    // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
            accent: Color::Rgb(245, 194, 231),  // #f5c2e7 (pink)

            live: Color::Rgb(166, 227, 161), // #a6e3a1 (green)

            sent_bg: Color::Rgb(203, 166, 247),     // #cba6f7
            sent_text: Color::Rgb(17, 17, 27),      // #11111b (crust)
            received_bg: Color::Rgb(49, 50, 68),    // #313244
            received_text: Color::Rgb(205, 214, 244),

            border: Color::Rgb(69, 71, 90),             // #45475a
            border_focused: Color::Rgb(203, 166, 247),  // #cba6f7
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(136, 57, 239), // #8839ef (mauve)
            accent: Color::Rgb(234, 118, 203), // #ea76cb (pink)

            live: Color::Rgb(64, 160, 43), // #40a02b (green)

            sent_bg: Color::Rgb(136, 57, 239),
            sent_text: Color::Rgb(239, 241, 245),
            received_bg: Color::Rgb(220, 224, 232),
            received_text: Color::Rgb(76, 79, 105),

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(136, 57, 239),  // #8839ef
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            accent: Color::Magenta,

            live: Color::Green,

            sent_bg: Color::Cyan,
            sent_text: Color::Black,
            received_bg: Color::Rgb(40, 40, 40),
            received_text: Color::White,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    /// Terminal default colors everywhere, for `NO_COLOR`.
    pub fn monochrome() -> Self {
        Self {
            base: Color::Reset,
            surface: Color::Reset,
            overlay: Color::Reset,
            text: Color::Reset,
            subtext: Color::Reset,
            muted: Color::Reset,
            primary: Color::Reset,
            accent: Color::Reset,
            live: Color::Reset,
            sent_bg: Color::Reset,
            sent_text: Color::Reset,
            received_bg: Color::Reset,
            received_text: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
        }
    }
}
