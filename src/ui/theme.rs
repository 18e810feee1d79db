//! Visual theme and styling.

use console::Style;

/// Log line styling.
#[derive(Debug, Clone)]
pub struct StepTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for section headers (blue bold).
    pub header: Style,
    /// Style for config keys (bold).
    pub key: Style,
    /// Style for echoed commands (dim).
    pub command: Style,
}

impl Default for StepTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StepTheme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().blue().bold(),
            key: Style::new().bold(),
            command: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format an echoed command line.
    pub fn format_command(&self, command: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", command)))
    }

    /// Format a `- key: value` line.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!("- {}: {}", self.key.apply_to(key), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = StepTheme::plain();
        assert_eq!(theme.format_success("Complete"), "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = StepTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = StepTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_command() {
        let theme = StepTheme::plain();
        assert_eq!(theme.format_command("pod install"), "$ pod install");
    }

    #[test]
    fn theme_formats_key_value() {
        let theme = StepTheme::plain();
        assert_eq!(theme.format_key_value("verbose", "false"), "- verbose: false");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = StepTheme::default();
        let new = StepTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
