//! Teal & Coral color theme for the shelfscan TUI, in dark and light modes.
//!
//! All colors are RGB truecolor. Views take a [`Palette`] and use its style
//! helpers instead of inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Teal: focused borders and active items.
pub const PRIMARY: Color = Color::Rgb(0x00, 0x80, 0x80);
/// Light teal: highlights and hints.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x00, 0x96, 0x88);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Coral: calls to action.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x7F, 0x50);
/// Deep coral, readable on light backgrounds.
pub const ACCENT_DEEP: Color = Color::Rgb(0xD8, 0x43, 0x15);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse a config value. Anything but `"light"` is dark.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("light") {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette::DARK,
            ThemeMode::Light => Palette::LIGHT,
        }
    }
}

/// Mode-dependent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_base: Color,
    pub bg_surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub primary: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_base: Color::Rgb(0x0A, 0x19, 0x19),
        bg_surface: Color::Rgb(0x12, 0x26, 0x26),
        text: Color::Rgb(0xE0, 0xE0, 0xE0),
        text_muted: Color::Rgb(0x80, 0x80, 0x80),
        text_dim: Color::Rgb(0x50, 0x50, 0x50),
        accent: ACCENT,
        primary: PRIMARY,
    };

    pub const LIGHT: Palette = Palette {
        bg_base: Color::Rgb(0xFA, 0xF7, 0xF2),
        bg_surface: Color::Rgb(0xEE, 0xE9, 0xE0),
        text: Color::Rgb(0x1E, 0x1E, 0x1E),
        text_muted: Color::Rgb(0x5F, 0x5F, 0x5F),
        text_dim: Color::Rgb(0x9E, 0x9E, 0x9E),
        accent: ACCENT_DEEP,
        primary: PRIMARY,
    };

    // ── Style helpers ───────────────────────────────────────────────────────

    /// Base style for a full-screen background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg_base)
    }

    /// Elevated panel background (modals).
    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg_surface)
    }

    /// Accent bold text (titles, active items).
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Section header style.
    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border_default(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Highlighted/selected item.
    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Key hint style (e.g., "[q]:quit").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Status bar brand badge.
    pub fn brand_badge(&self) -> Style {
        Style::default()
            .fg(self.bg_base)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Insert mode badge.
    pub fn insert_badge(&self) -> Style {
        Style::default()
            .fg(self.bg_base)
            .bg(PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    // ── Block builders ──────────────────────────────────────────────────────

    /// A bordered block, styled by focus.
    pub fn block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        let border = if focused {
            self.border_focused()
        } else {
            self.border_default()
        };
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(border)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DARK
    }
}
