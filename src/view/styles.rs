//! Table styling configuration.
//!
//! A small fixed palette, switched off entirely by `--no-color`/`NO_COLOR`.

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

    /// Fixed setting, for tests.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== TableStyles =====

/// Styles shared by every widget in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Highlighted row.
    pub highlight: Style,
    /// Borders and titles.
    pub border: Style,
    /// Loading indicator.
    pub loading: Style,
    /// Failed-fetch diagnostics.
    pub error: Style,
    /// Hints and secondary text.
    pub muted: Style,
    /// Key names in the help overlay.
    pub key: Style,
    /// Labels in the detail modal.
    pub label: Style,
}

impl TableStyles {
    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled, only modifiers (bold, reversed) remain so
    /// the highlight is still visible.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                header: bold.fg(Color::Yellow),
                highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Cyan),
                loading: Style::default().fg(Color::Green),
                error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::Gray),
                key: bold.fg(Color::Yellow),
                label: bold.fg(Color::Cyan),
            }
        } else {
            Self {
                header: bold,
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                border: Style::default(),
                loading: Style::default(),
                error: Style::default(),
                muted: Style::default(),
                key: bold,
                label: bold,
            }
        }
    }
}

impl Default for TableStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
