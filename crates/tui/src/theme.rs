//! Light and dark colour palettes.
//!
//! The theme only lives for the session; every launch starts light.

use ratatui::style::{Color, Style};
use taskboard_protocol::{Priority, PriorityColor, color_for};

/// The two available colour themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

/// Concrete colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background.
    pub background: Color,
    /// Regular text.
    pub foreground: Color,
    /// Secondary text and unfocused borders.
    pub muted: Color,
    /// Focused borders and titles.
    pub accent: Color,
    /// Keys in hints and the help overlay.
    pub key: Color,
    /// Calendar dates that have tasks due.
    pub marked: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    foreground: Color::Black,
    muted: Color::Gray,
    accent: Color::Blue,
    key: Color::Magenta,
    marked: Color::LightRed,
};

const DARK: Palette = Palette {
    background: Color::Black,
    foreground: Color::White,
    muted: Color::DarkGray,
    accent: Color::Cyan,
    key: Color::Yellow,
    marked: Color::LightMagenta,
};

impl Theme {
    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Returns the theme's name as shown in the header.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Returns the palette for this theme.
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// Base style for a themed surface.
    #[must_use]
    pub fn base_style(self) -> Style {
        let palette = self.palette();
        Style::default().fg(palette.foreground).bg(palette.background)
    }

    /// Maps a priority colour onto a terminal colour.
    ///
    /// Neutral falls back to the palette's muted colour.
    #[must_use]
    pub const fn priority_color(self, color: PriorityColor) -> Color {
        match color {
            PriorityColor::Red => Color::Red,
            PriorityColor::Yellow => Color::Yellow,
            PriorityColor::Green => Color::Green,
            PriorityColor::Neutral => self.palette().muted,
        }
    }

    /// Terminal colour for a task of the given priority.
    #[must_use]
    pub const fn color_of(self, priority: Priority) -> Color {
        self.priority_color(color_for(priority))
    }
}
