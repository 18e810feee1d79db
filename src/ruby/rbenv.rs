//! rbenv Ruby version check.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::shell::{CommandLine, CommandRunner};

/// "rbenv: version `2.7.1' is not installed (set by ...)". Newer rbenv quotes with `'`.
static NOT_INSTALLED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rbenv: version [`'](.+?)' is not installed")
        .expect("NOT_INSTALLED must compile")
});

/// "2.7.1 (set by /path/.ruby-version)".
static SELECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(\S+) \(set by").expect("SELECTED must compile")
});

/// Ruby version rbenv selects for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RbenvRuby {
    pub version: String,
    pub installed: bool,
}

/// Interpret `rbenv version` output. `None` when it names no version.
pub fn parse_rbenv_version(output: &str) -> Option<RbenvRuby> {
    if let Some(caps) = NOT_INSTALLED.captures(output) {
        return Some(RbenvRuby {
            version: caps[1].to_string(),
            installed: false,
        });
    }
    SELECTED.captures(output).map(|caps| RbenvRuby {
        version: caps[1].to_string(),
        installed: true,
    })
}

/// Run `rbenv version` in `dir`. The exit code is ignored since rbenv exits
/// non-zero exactly when the selected version is missing.
pub fn selected_ruby(runner: &dyn CommandRunner, dir: &Path) -> Result<Option<RbenvRuby>> {
    let cmd = CommandLine::new("rbenv").arg("version").current_dir(dir);
    let result = runner.output(&cmd)?;
    Ok(parse_rbenv_version(&result.output))
}

/// `rbenv install <version>`.
pub fn install_ruby(version: &str) -> CommandLine {
    CommandLine::new("rbenv").args(&["install", version])
}
