//! Theme palette and color configuration.
//!
//! Maps the light/dark [`Theme`] onto terminal colors. The state layer
//! never sees any of this; it only flips the theme value.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Theme;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Resolved colors for one theme.
///
/// With colors disabled every entry is `Color::Reset`, which renders as
/// the terminal default.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Body text.
    pub text: Color,
    /// Secondary text: hints, counters, descriptions.
    pub muted: Color,
    /// Highlights: titles, active dots, links.
    pub accent: Color,
    /// Unfocused pane borders.
    pub frame: Color,
    /// Focused pane border.
    pub focus: Color,
    /// Tech chip text.
    pub chip: Color,
    /// Sticky-note background.
    pub note_bg: Color,
    /// Sticky-note text (dark on yellow in both themes).
    pub note_text: Color,
    /// Validation error messages.
    pub error: Color,
    /// Success notice.
    pub success: Color,
}

impl Palette {
    /// Resolve the palette for a theme.
    pub fn new(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::plain();
        }
        match theme {
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                frame: Color::Gray,
                focus: Color::Blue,
                chip: Color::Cyan,
                note_bg: Color::LightYellow,
                note_text: Color::Black,
                error: Color::Red,
                success: Color::Green,
            },
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::Gray,
                accent: Color::LightBlue,
                frame: Color::DarkGray,
                focus: Color::LightBlue,
                chip: Color::LightCyan,
                note_bg: Color::Yellow,
                note_text: Color::Black,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
        }
    }

    fn plain() -> Self {
        Self {
            text: Color::Reset,
            muted: Color::Reset,
            accent: Color::Reset,
            frame: Color::Reset,
            focus: Color::Reset,
            chip: Color::Reset,
            note_bg: Color::Reset,
            note_text: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    }

    /// Border style for a pane, highlighted when focused.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.frame)
        }
    }

    /// Style for project/panel titles.
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text.
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for body text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}

// ===== Tests =====
