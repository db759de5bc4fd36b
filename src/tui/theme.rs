//! Theme system for TUI colors and styles
//!
//! Defines color constants consistent with the CLI output.

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Group state colors
    pub active: Color,
    pub inactive: Color,

    // Filter tag colors
    pub project_tag: Color,
    pub label_tag: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            active: Color::Green,
            inactive: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            project_tag: Color::Blue,
            label_tag: Color::Magenta,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Get the color for the group activity flag
    pub fn active_color(&self, is_active: bool) -> Color {
        if is_active { self.active } else { self.inactive }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
