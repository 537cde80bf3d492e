//! Styling for the directory screens.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
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

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// Styles for every element of a directory screen.
///
/// Without colors, emphasis falls back to bold and reversed video so the
/// cursor and the selected row stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    /// Screen header text.
    pub header: Style,
    /// Search input border and title.
    pub search_border: Style,
    /// Cell under the query cursor.
    pub cursor: Style,
    /// Results list border and title.
    pub results_border: Style,
    /// Highlighted result row.
    pub selected: Style,
    /// Hints and the empty-result message.
    pub muted: Style,
    /// Key names in the help overlay and status bar.
    pub key: Style,
}

impl ViewStyles {
    /// Styles for `config`: colored, or monochrome emphasis only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                search_border: Style::default().fg(Color::Yellow),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                results_border: Style::default().fg(Color::Blue),
                selected: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                search_border: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                results_border: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                muted: Style::default(),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
