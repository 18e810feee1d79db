//! How Ruby is installed on the host, and what that means for gem commands.

use std::fmt;

use crate::shell::{CommandLine, CommandRunner};

/// Where the `ruby` on PATH comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubyInstallType {
    /// macOS system Ruby; gem installs need root.
    System,
    /// Homebrew Ruby.
    Brew,
    /// rbenv shim.
    Rbenv,
    /// RVM-managed Ruby.
    Rvm,
    /// Anything else, or no Ruby at all.
    Unknown,
}

const SYSTEM_RUBY: &str = "/usr/bin/ruby";
const BREW_RUBIES: &[&str] = &[
    "/usr/local/bin/ruby",
    "/usr/local/opt/ruby/bin/ruby",
    "/opt/homebrew/bin/ruby",
    "/opt/homebrew/opt/ruby/bin/ruby",
];

impl RubyInstallType {
    /// Classify by the resolved `ruby` path.
    pub fn from_ruby_path(path: &str) -> Self {
        let path = path.trim();
        if path == SYSTEM_RUBY {
            Self::System
        } else if BREW_RUBIES.contains(&path) {
            Self::Brew
        } else if path.contains("/.rbenv/") {
            Self::Rbenv
        } else if path.contains("/.rvm/") {
            Self::Rvm
        } else {
            Self::Unknown
        }
    }

    /// Ask `which ruby`. Any failure means [`RubyInstallType::Unknown`].
    pub fn detect(runner: &dyn CommandRunner) -> Self {
        match runner.output(&CommandLine::new("which").arg("ruby")) {
            Ok(result) if result.success => Self::from_ruby_path(&result.output),
            Ok(_) => Self::Unknown,
            Err(e) => {
                tracing::debug!("which ruby failed: {}", e);
                Self::Unknown
            }
        }
    }
}

impl fmt::Display for RubyInstallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::Brew => "brew",
            Self::Rbenv => "rbenv",
            Self::Rvm => "rvm",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// The Ruby setup gem commands are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RubyEnv {
    pub install_type: RubyInstallType,
    /// Already running as root.
    pub elevated: bool,
}

impl RubyEnv {
    pub fn new(install_type: RubyInstallType, elevated: bool) -> Self {
        Self {
            install_type,
            elevated,
        }
    }

    /// Inspect the host.
    pub fn detect(runner: &dyn CommandRunner) -> Self {
        let env = Self::new(
            RubyInstallType::detect(runner),
            crate::shell::is_elevated(),
        );
        tracing::debug!("ruby install type: {}, elevated: {}", env.install_type, env.elevated);
        env
    }

    /// Build a command, prefixed with `sudo` when it modifies system Ruby
    /// gems and we are not root.
    pub fn command<S: AsRef<str>>(&self, program: &str, args: &[S]) -> CommandLine {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        if self.needs_sudo(program, &args) {
            CommandLine::new("sudo").arg(program).args(args.as_slice())
        } else {
            CommandLine::new(program).args(args.as_slice())
        }
    }

    fn needs_sudo(&self, program: &str, args: &[&str]) -> bool {
        if self.install_type != RubyInstallType::System || self.elevated {
            return false;
        }
        // Skip a bundler version selector like `_2.1.4_`.
        let subcommand = args
            .iter()
            .find(|a| !(a.starts_with('_') && a.ends_with('_') && a.len() > 1));
        match (program, subcommand) {
            ("gem", Some(&sub)) => matches!(sub, "install" | "uninstall"),
            ("bundle", Some(&sub)) => matches!(sub, "install" | "update"),
            _ => false,
        }
    }
}
