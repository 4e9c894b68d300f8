//! Visual theme and styling.

use console::Style;

use crate::store::Theme;

/// dryg's terminal palette.
#[derive(Debug, Clone)]
pub struct DrygTheme {
    /// Style for success messages.
    pub success: Style,
    /// Style for warning messages.
    pub warning: Style,
    /// Style for error messages.
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers.
    pub header: Style,
    /// Style for `!trigger` names.
    pub trigger: Style,
    /// Style for URLs.
    pub url: Style,
    /// Style for contextual hints.
    pub hint: Style,
}

impl Default for DrygTheme {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

impl DrygTheme {
    /// Palette for a saved theme preference.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                success: Style::new().green(),
                warning: Style::new().color256(208),
                error: Style::new().red().bold(),
                dim: Style::new().dim(),
                header: Style::new().bold().magenta(),
                trigger: Style::new().bold().cyan(),
                url: Style::new().underlined(),
                hint: Style::new().magenta().dim(),
            },
            Theme::Light => Self {
                success: Style::new().color256(28),
                warning: Style::new().color256(130),
                error: Style::new().color256(160).bold(),
                dim: Style::new().color256(244),
                header: Style::new().bold().color256(90),
                trigger: Style::new().bold().color256(25),
                url: Style::new().underlined(),
                hint: Style::new().color256(90),
            },
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            trigger: Style::new(),
            url: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("!"), self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
