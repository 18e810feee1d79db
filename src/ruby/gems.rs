//! Gem and bundler command builders, and the installed-gem check.

use crate::error::Result;
use crate::shell::{CommandLine, CommandRunner};

use super::install_type::{RubyEnv, RubyInstallType};

/// `gem install <gem> --no-document [-v <version>]`, then `rbenv rehash`
/// when Ruby is rbenv-managed so the new executable gets a shim.
pub fn gem_install(env: &RubyEnv, gem: &str, version: Option<&str>) -> Vec<CommandLine> {
    let mut args = vec!["install", gem, "--no-document"];
    if let Some(version) = version {
        args.extend(["-v", version]);
    }

    let mut cmds = vec![env.command("gem", args.as_slice())];
    if env.install_type == RubyInstallType::Rbenv {
        cmds.push(env.command("rbenv", &["rehash"]));
    }
    cmds
}

/// `gem install bundler --force [--version <version>]`.
///
/// Installing the pinned bundler up front avoids `bundle _x_` resolving to
/// "command not found" on hosts that lack that exact version.
pub fn install_bundler(env: &RubyEnv, version: Option<&str>) -> CommandLine {
    let mut args = vec!["install", "bundler", "--force"];
    if let Some(version) = version {
        args.extend(["--version", version]);
    }
    env.command("gem", args.as_slice())
}

/// `_<version>_`, the RubyGems selector for a specific executable version.
fn version_selector(version: Option<&str>) -> Vec<String> {
    version.map(|v| format!("_{}_", v)).into_iter().collect()
}

/// `bundle [_<version>_] install --jobs 20 --retry 5`.
pub fn bundle_install(env: &RubyEnv, version: Option<&str>) -> CommandLine {
    let mut args = version_selector(version);
    args.extend(["install", "--jobs", "20", "--retry", "5"].map(String::from));
    env.command("bundle", args.as_slice())
}

/// `bundle [_<version>_] exec`, to prefix a wrapped command with.
pub fn bundle_exec(version: Option<&str>) -> CommandLine {
    CommandLine::new("bundle")
        .args(version_selector(version).as_slice())
        .arg("exec")
}

/// Check `gem list` for `gem` at exactly `version`.
pub fn is_gem_installed(runner: &dyn CommandRunner, gem: &str, version: &str) -> Result<bool> {
    let cmd = CommandLine::new("gem").arg("list");
    let result = runner.output(&cmd)?.check(&cmd)?;
    Ok(find_gem_in_list(&result.output, gem, version))
}

/// Look for `version` among the versions `gem list` prints for `gem`.
///
/// ```
/// use cocoapods_install::ruby::find_gem_in_list;
///
/// let list = "cocoapods (1.10.1, 1.9.3)\ncocoapods-core (1.10.1)";
/// assert!(find_gem_in_list(list, "cocoapods", "1.9.3"));
/// assert!(!find_gem_in_list(list, "cocoapods", "1.9"));
/// ```
pub fn find_gem_in_list(gem_list: &str, gem: &str, version: &str) -> bool {
    gem_list.lines().any(|line| {
        let Some(rest) = line.trim().strip_prefix(gem) else {
            return false;
        };
        let Some(versions) = rest
            .strip_prefix(" (")
            .and_then(|r| r.strip_suffix(')'))
        else {
            return false;
        };
        versions
            .split(", ")
            .map(|v| v.trim_start_matches("default: "))
            .any(|v| v == version)
    })
}
