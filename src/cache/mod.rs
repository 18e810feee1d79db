//! Pods cache declaration for the host pipeline.
//!
//! The host caches every path listed in `BITRISE_CACHE_INCLUDE_PATHS`
//! (newline separated). A `path -> indicator` entry is only refreshed when the
//! indicator file changes, so `Pods/` is keyed on `Podfile.lock`.

use std::path::Path;

use crate::error::Result;
use crate::shell::{CommandLine, CommandRunner};

/// Env var the host reads include paths from.
pub const CACHE_INCLUDE_PATHS_KEY: &str = "BITRISE_CACHE_INCLUDE_PATHS";

/// Directory CocoaPods installs into, next to the Podfile.
pub const PODS_DIR: &str = "Pods";

/// `"<podfile_dir>/Pods -> <Podfile.lock>"`.
pub fn include_path_key(podfile_dir: &Path, lock_path: &Path) -> String {
    format!(
        "{} -> {}",
        podfile_dir.join(PODS_DIR).display(),
        lock_path.display()
    )
}

/// Append `entry` to the existing newline-separated list.
pub fn append_include_path(existing: Option<&str>, entry: &str) -> String {
    match existing.map(str::trim).filter(|e| !e.is_empty()) {
        Some(existing) => format!("{}\n{}", existing, entry),
        None => entry.to_string(),
    }
}

/// Publish include paths through `envman`.
pub fn commit(runner: &dyn CommandRunner, entries: &[String]) -> Result<()> {
    let existing = std::env::var(CACHE_INCLUDE_PATHS_KEY).ok();
    let value = entries
        .iter()
        .fold(existing.unwrap_or_default(), |acc, entry| {
            append_include_path(Some(acc.as_str()), entry)
        });

    let cmd = CommandLine::new("envman").args(&[
        "add",
        "--key",
        CACHE_INCLUDE_PATHS_KEY,
        "--value",
        value.as_str(),
    ]);
    tracing::debug!("committing cache paths: {:?}", entries);
    runner.output(&cmd)?.check(&cmd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;

    #[test]
    fn key_points_pods_at_lock() {
        let key = include_path_key(Path::new("/src/ios"), Path::new("/src/ios/Podfile.lock"));
        assert_eq!(key, "/src/ios/Pods -> /src/ios/Podfile.lock");
    }

    #[test]
    fn append_to_empty() {
        assert_eq!(append_include_path(None, "a -> b"), "a -> b");
        assert_eq!(append_include_path(Some("  "), "a -> b"), "a -> b");
    }

    #[test]
    fn append_to_existing() {
        assert_eq!(
            append_include_path(Some("~/.gradle"), "a -> b"),
            "~/.gradle\na -> b"
        );
    }

    #[test]
    fn commit_calls_envman() {
        let runner = MockRunner::new();
        commit(&runner, &["/src/Pods -> /src/Podfile.lock".to_string()]).unwrap();

        let cmds = runner.commands();
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].program, "envman");
        assert_eq!(cmds[0].args[..3], ["add", "--key", CACHE_INCLUDE_PATHS_KEY]);
        assert!(cmds[0].args[4].ends_with("/src/Pods -> /src/Podfile.lock"));
    }

    #[test]
    fn commit_failure_is_error() {
        let runner = MockRunner::new();
        runner.respond("envman", 1, "");
        assert!(commit(&runner, &["x -> y".to_string()]).is_err());
    }
}
