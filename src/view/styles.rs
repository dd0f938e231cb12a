//! Color and style configuration.

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

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// The styles every widget draws with.
///
/// Green is the brand color, carried over from the web client: queries,
/// scores, chips, and affordance hints all use it.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Brand accent: scores, headers, affordances.
    pub accent: Style,
    /// The user's own bubble in the transcript.
    pub user: Style,
    /// De-emphasized text: hints, placeholders, descriptions.
    pub muted: Style,
    /// Transient error notice.
    pub notice: Style,
    /// Unselected suggestion chip.
    pub chip: Style,
    /// The focused suggestion chip.
    pub chip_selected: Style,
    /// The selected match row.
    pub selected: Style,
}

impl Palette {
    /// Palette honoring `NO_COLOR` from the environment.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Palette for an explicit color configuration.
    ///
    /// With colors disabled, selection and emphasis fall back to text
    /// modifiers so the UI stays navigable on monochrome terminals.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                accent: Style::default().fg(Color::Green),
                user: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                muted: Style::default().fg(Color::DarkGray),
                notice: Style::default().fg(Color::Red),
                chip: Style::default().fg(Color::Green),
                chip_selected: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                selected: Style::default().fg(Color::Green).add_modifier(Modifier::REVERSED),
            }
        } else {
            Self {
                accent: Style::default(),
                user: Style::default().add_modifier(Modifier::BOLD),
                muted: Style::default().add_modifier(Modifier::DIM),
                notice: Style::default().add_modifier(Modifier::BOLD),
                chip: Style::default(),
                chip_selected: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
