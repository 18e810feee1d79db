//! External command execution.

use crate::error::{InstallError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program invocation: argv plus an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Executable name or path.
    pub program: String,

    /// Arguments, not including the program.
    pub args: Vec<String>,

    /// Working directory (None inherits the parent's).
    pub dir: Option<PathBuf>,
}

impl CommandLine {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        self.args.extend(args.iter().map(|a| a.as_ref().to_string()));
        self
    }

    /// Set the working directory.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// The full argv, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Shell-like rendering for logs. Arguments with whitespace are quoted.
    pub fn printable(&self) -> String {
        self.argv()
            .iter()
            .map(|a| {
                if a.is_empty() || a.contains(char::is_whitespace) {
                    format!("\"{}\"", a)
                } else {
                    a.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.printable())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Combined stdout and stderr. Empty when output was streamed.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(output: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            output,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, output: String, duration: Duration) -> Self {
        Self {
            exit_code,
            output,
            duration,
            success: false,
        }
    }

    /// Turn a non-zero exit into [`InstallError::CommandFailed`].
    pub fn check(self, command: &CommandLine) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(InstallError::CommandFailed {
                command: command.printable(),
                code: self.exit_code,
            })
        }
    }
}

/// Executes external commands.
///
/// The orchestrator only talks to this trait, so tests can swap in
/// [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run with stdout/stderr streamed live to the parent's.
    fn run(&self, command: &CommandLine) -> Result<CommandResult>;

    /// Run with stdout/stderr captured into [`CommandResult::output`].
    fn output(&self, command: &CommandLine) -> Result<CommandResult>;
}

/// Runs commands on the host with `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("spawning {}", command);

        let status = command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| InstallError::CommandSpawn {
                command: command.printable(),
                source,
            })?;

        let duration = start.elapsed();
        let result = if status.success() {
            CommandResult::success(String::new(), duration)
        } else {
            CommandResult::failure(status.code(), String::new(), duration)
        };
        log_exit(command, &result);
        Ok(result)
    }

    fn output(&self, command: &CommandLine) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!("capturing {}", command);

        let output = command
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InstallError::CommandSpawn {
                command: command.printable(),
                source,
            })?;

        let duration = start.elapsed();

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_string();

        let result = if output.status.success() {
            CommandResult::success(combined, duration)
        } else {
            CommandResult::failure(output.status.code(), combined, duration)
        };
        log_exit(command, &result);
        Ok(result)
    }
}

fn log_exit(command: &CommandLine, result: &CommandResult) {
    tracing::debug!(
        "{} exited with {:?} in {:?}",
        command,
        result.exit_code,
        result.duration
    );
}
