//! UI for CI logs.

use super::theme::StepTheme;
use super::UserInterface;

/// Writes styled lines to stdout, and warnings and errors to stderr.
pub struct NonInteractiveUI {
    theme: StepTheme,
}

impl NonInteractiveUI {
    /// Create a UI, coloured when the terminal supports it.
    pub fn new() -> Self {
        Self::with_colors(super::should_use_colors())
    }

    /// Create with an explicit color choice.
    pub fn with_colors(colors: bool) -> Self {
        let theme = if colors {
            StepTheme::new()
        } else {
            StepTheme::plain()
        };
        Self { theme }
    }
}

impl Default for NonInteractiveUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
    }

    fn command(&mut self, command: &str) {
        println!("{}", self.theme.format_command(command));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}", self.theme.format_key_value(key, value));
    }
}
