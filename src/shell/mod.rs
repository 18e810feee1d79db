//! External command execution and platform checks.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandLine, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, is_elevated};
