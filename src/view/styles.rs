//! Data view styling configuration.
//!
//! Distinct styles for the pager (links, current page, report), the layout
//! toggle, the empty state and the loading overlay.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Environment variable that turns colors off when set to a non-empty value.
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Whether foreground colors are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors are on unless `--no-color` was passed or `NO_COLOR` is non-empty.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os(NO_COLOR_ENV_VAR).is_some_and(|value| !value.is_empty());
        Self {
            enabled: !(no_color_flag || no_color_env),
        }
    }

    /// True when colors are drawn.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewStyles =====

/// Styles used by the data view widgets.
///
/// Modifiers (bold, reversed, dim) survive `--no-color`; only foreground
/// colors are dropped, so the current page and disabled links stay
/// distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyles {
    /// Header and item titles.
    pub title: Style,
    /// Enabled navigation and page links.
    pub link: Style,
    /// Disabled navigation links.
    pub disabled_link: Style,
    /// The current page link.
    pub current_page: Style,
    /// Page report text.
    pub report: Style,
    /// Highlighted layout option.
    pub highlighted_option: Style,
    /// Field names and hints.
    pub muted: Style,
    /// Empty-state message.
    pub empty: Style,
    /// Loading overlay border and text.
    pub loading: Style,
}

impl ViewStyles {
    /// Create styles honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles for `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let color = |c: Color| {
            if config.colors_enabled() {
                Style::default().fg(c)
            } else {
                Style::default()
            }
        };

        Self {
            title: color(Color::Cyan).add_modifier(Modifier::BOLD),
            link: color(Color::Blue),
            disabled_link: color(Color::DarkGray).add_modifier(Modifier::DIM),
            current_page: color(Color::Yellow).add_modifier(Modifier::REVERSED),
            report: color(Color::Gray),
            highlighted_option: color(Color::Green).add_modifier(Modifier::BOLD),
            muted: color(Color::DarkGray),
            empty: color(Color::Gray).add_modifier(Modifier::ITALIC),
            loading: color(Color::Magenta),
        }
    }
}

impl Default for ViewStyles {
    fn default() -> Self {
        Self::new()
    }
}
