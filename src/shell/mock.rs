//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every invocation and answers from pre-configured responses,
//! matched by the longest printable-command prefix.
//!
//! # Example
//!
//! ```
//! use cocoapods_install::shell::{CommandLine, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond("gem list", 0, "cocoapods (1.10.1)");
//! runner.respond("pod install --no-repo-update", 1, "");
//!
//! let result = runner.output(&CommandLine::new("gem").arg("list")).unwrap();
//! assert_eq!(result.output, "cocoapods (1.10.1)");
//! assert_eq!(runner.invocations(), vec!["gem list".to_string()]);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandLine, CommandResult, CommandRunner};

#[derive(Debug, Clone)]
struct Response {
    prefix: String,
    exit_code: i32,
    output: String,
}

/// Recording command runner. Unmatched commands succeed with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: RefCell<Vec<Response>>,
    invocations: RefCell<Vec<CommandLine>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer commands starting with `prefix` with the given exit code and output.
    pub fn respond(&self, prefix: &str, exit_code: i32, output: &str) {
        self.responses.borrow_mut().push(Response {
            prefix: prefix.to_string(),
            exit_code,
            output: output.to_string(),
        });
    }

    /// Printable form of every command run so far, in order.
    pub fn invocations(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(CommandLine::printable)
            .collect()
    }

    /// Full command lines run so far, including working directories.
    pub fn commands(&self) -> Vec<CommandLine> {
        self.invocations.borrow().clone()
    }

    /// Whether any invocation starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.invocations().iter().any(|c| c.starts_with(prefix))
    }

    fn answer(&self, command: &CommandLine) -> CommandResult {
        self.invocations.borrow_mut().push(command.clone());

        let printable = command.printable();
        let responses = self.responses.borrow();
        let matched = responses
            .iter()
            .filter(|r| printable.starts_with(&r.prefix))
            .max_by_key(|r| r.prefix.len());

        match matched {
            Some(r) if r.exit_code == 0 => CommandResult::success(r.output.clone(), Duration::ZERO),
            Some(r) => CommandResult::failure(Some(r.exit_code), r.output.clone(), Duration::ZERO),
            None => CommandResult::success(String::new(), Duration::ZERO),
        }
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandResult> {
        Ok(self.answer(command))
    }

    fn output(&self, command: &CommandLine) -> Result<CommandResult> {
        Ok(self.answer(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_commands_succeed() {
        let runner = MockRunner::new();
        let result = runner.run(&CommandLine::new("pod").arg("--version")).unwrap();
        assert!(result.success);
        assert!(runner.ran("pod --version"));
    }

    #[test]
    fn longest_prefix_wins() {
        let runner = MockRunner::new();
        runner.respond("pod", 0, "");
        runner.respond("pod install --no-repo-update", 1, "");

        let fast = CommandLine::new("pod").args(&["install", "--no-repo-update"]);
        let full = CommandLine::new("pod").arg("install");

        assert!(!runner.run(&fast).unwrap().success);
        assert!(runner.run(&full).unwrap().success);
    }
}
