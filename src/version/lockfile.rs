//! Version extraction from Podfile.lock and Gemfile.lock text.
//!
//! The `*_from_*` functions are pure; the `read_*` variants only add the read.
//! A missing entry is `None`, never an error.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;

use crate::error::Result;

/// `COCOAPODS: 1.10.1` line at the bottom of a Podfile.lock.
static PODFILE_LOCK_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"COCOAPODS: (.+)").expect("PODFILE_LOCK_VERSION must compile")
});

/// `BUNDLED WITH` section of a Gemfile.lock; the version is on the next line.
static BUNDLED_WITH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^BUNDLED WITH\r?\n\s+(\S+)").expect("BUNDLED_WITH must compile")
});

/// CocoaPods version recorded in Podfile.lock content.
///
/// ```
/// use cocoapods_install::version::cocoapods_version_from_podfile_lock;
///
/// let lock = "PODFILE CHECKSUM: abc\n\nCOCOAPODS: 1.10.1\n";
/// assert_eq!(cocoapods_version_from_podfile_lock(lock).as_deref(), Some("1.10.1"));
/// assert_eq!(cocoapods_version_from_podfile_lock("PODS:\n"), None);
/// ```
pub fn cocoapods_version_from_podfile_lock(content: &str) -> Option<String> {
    PODFILE_LOCK_VERSION
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Version of `gem` in the `specs:` list of a Gemfile.lock's first source block.
///
/// Only lines from `specs:` up to the first blank line are considered, and the
/// first `<gem> (<version>)` among them wins. The captured text may be a
/// constraint list (`>= 1.8.0, < 2.0.0`) when another gem's dependency line
/// names `gem` first.
///
/// ```
/// use cocoapods_install::version::gem_version_from_gemfile_lock;
///
/// let lock = "GEM\n  remote: https://rubygems.org/\n  specs:\n    cocoapods (1.10.1)\n\nBUNDLED WITH\n   2.1.4\n";
/// assert_eq!(gem_version_from_gemfile_lock("cocoapods", lock).unwrap().as_deref(), Some("1.10.1"));
/// ```
pub fn gem_version_from_gemfile_lock(gem: &str, content: &str) -> Result<Option<String>> {
    let pattern = format!(r"^{} \((.+)\)", regex::escape(gem));
    let re = Regex::new(&pattern).with_context(|| format!("Invalid gem name pattern: {}", gem))?;

    let mut in_specs = false;
    for line in content.lines() {
        if line.contains("specs:") {
            in_specs = true;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        if !in_specs {
            continue;
        }
        if let Some(caps) = re.captures(trimmed) {
            return Ok(caps.get(1).map(|m| m.as_str().to_string()));
        }
    }

    Ok(None)
}

/// Bundler version from the `BUNDLED WITH` section of a Gemfile.lock.
///
/// ```
/// use cocoapods_install::version::bundler_version_from_gemfile_lock;
///
/// assert_eq!(bundler_version_from_gemfile_lock("BUNDLED WITH\n   2.1.4\n").as_deref(), Some("2.1.4"));
/// ```
pub fn bundler_version_from_gemfile_lock(content: &str) -> Option<String> {
    BUNDLED_WITH
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Read a Podfile.lock and extract the CocoaPods version.
pub fn read_podfile_lock_version(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path)?;
    Ok(cocoapods_version_from_podfile_lock(&content))
}

/// Versions recorded in a Gemfile.lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GemfileLockVersions {
    /// The `cocoapods` gem entry, if any.
    pub cocoapods: Option<String>,
    /// The `BUNDLED WITH` bundler version, if any.
    pub bundler: Option<String>,
}

/// Read a Gemfile.lock and extract the cocoapods and bundler versions.
pub fn read_gemfile_lock_versions(path: &Path) -> Result<GemfileLockVersions> {
    let content = fs::read_to_string(path)?;
    Ok(GemfileLockVersions {
        cocoapods: gem_version_from_gemfile_lock("cocoapods", &content)?,
        bundler: bundler_version_from_gemfile_lock(&content),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PODFILE_LOCK: &str = "PODS:
  - Alamofire (5.4.1)

DEPENDENCIES:
  - Alamofire

SPEC CHECKSUMS:
  Alamofire: 2291f7d21ca607c491dd17642e5d40fcfd0e4d7a

PODFILE CHECKSUM: 9d8ad5e5c4c8e1f6b6b2b1c1f4f6d1e3e0b4a3f2

COCOAPODS: 1.10.1
";

    const GEMFILE_LOCK: &str = "GEM
  remote: https://rubygems.org/
  specs:
    CFPropertyList (3.0.3)
    activesupport (5.2.4.4)
    cocoapods (1.9.3)
      cocoapods-core (= 1.9.3)
    cocoapods-core (1.9.3)

PLATFORMS
  ruby

DEPENDENCIES
  cocoapods (~> 1.9)

BUNDLED WITH
   2.1.4
";

    #[test]
    fn podfile_lock_version_found() {
        assert_eq!(
            cocoapods_version_from_podfile_lock(PODFILE_LOCK).as_deref(),
            Some("1.10.1")
        );
    }

    #[test]
    fn podfile_lock_without_label_is_none() {
        assert_eq!(cocoapods_version_from_podfile_lock("PODS:\n  - A (1.0)\n"), None);
    }

    #[test]
    fn podfile_lock_tolerates_crlf() {
        assert_eq!(
            cocoapods_version_from_podfile_lock("COCOAPODS: 1.11.2\r\n").as_deref(),
            Some("1.11.2")
        );
    }

    #[test]
    fn gemfile_lock_cocoapods_from_specs() {
        assert_eq!(
            gem_version_from_gemfile_lock("cocoapods", GEMFILE_LOCK)
                .unwrap()
                .as_deref(),
            Some("1.9.3")
        );
    }

    #[test]
    fn gemfile_lock_does_not_confuse_prefixed_gems() {
        let lock = "GEM\n  specs:\n    cocoapods-core (1.9.3)\n\n";
        assert_eq!(gem_version_from_gemfile_lock("cocoapods", lock).unwrap(), None);
    }

    #[test]
    fn gemfile_lock_missing_gem_is_none() {
        let lock = "GEM\n  specs:\n    fastlane (2.170.0)\n\nDEPENDENCIES\n  cocoapods (1.0.0)\n";
        assert_eq!(gem_version_from_gemfile_lock("cocoapods", lock).unwrap(), None);
    }

    #[test]
    fn gemfile_lock_nested_dependency_line_wins_when_first() {
        let lock = "GEM\n  specs:\n    arkana (1.0.0)\n      cocoapods (>= 1.8.0, < 2.0.0)\n    cocoapods (1.10.1)\n\n";
        assert_eq!(
            gem_version_from_gemfile_lock("cocoapods", lock)
                .unwrap()
                .as_deref(),
            Some(">= 1.8.0, < 2.0.0")
        );
    }

    #[test]
    fn bundler_version_found() {
        assert_eq!(
            bundler_version_from_gemfile_lock(GEMFILE_LOCK).as_deref(),
            Some("2.1.4")
        );
        assert_eq!(bundler_version_from_gemfile_lock("GEM\n  specs:\n"), None);
    }

    #[test]
    fn read_gemfile_lock_versions_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Gemfile.lock");
        fs::write(&path, GEMFILE_LOCK).unwrap();

        let versions = read_gemfile_lock_versions(&path).unwrap();
        assert_eq!(versions.cocoapods.as_deref(), Some("1.9.3"));
        assert_eq!(versions.bundler.as_deref(), Some("2.1.4"));
    }

    #[test]
    fn read_missing_podfile_lock_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = read_podfile_lock_version(&temp.path().join("Podfile.lock")).unwrap_err();
        assert!(matches!(err, crate::error::InstallError::Io(_)));
    }
}
