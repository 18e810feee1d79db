//! Step log output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`NonInteractiveUI`] writing styled lines to stdout/stderr
//! - [`MockUI`] capturing lines for assertions
//!
//! # Example
//!
//! ```
//! use cocoapods_install::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Installing Pods");
//! ui.success("Success!");
//! assert!(ui.has_success("Success!"));
//! ```

pub mod mock;
pub mod non_interactive;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use theme::{should_use_colors, StepTheme};

/// Trait for user-facing log output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Start a new section, preceded by a blank line.
    fn show_header(&mut self, title: &str);

    /// Echo a command line before it runs.
    fn command(&mut self, command: &str);

    /// Display a `- key: value` line.
    fn key_value(&mut self, key: &str, value: &str);
}
