//! Install strategy selection.
//!
//! The two lock files are read once and reduced to an [`InstallStrategy`],
//! which every later stage only reads.

use std::fmt;

use crate::error::Result;
use crate::version::{included, GemfileLockVersions};

/// Where the required CocoaPods version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// `COCOAPODS:` in Podfile.lock.
    PodfileLock,
    /// The `cocoapods` entry in Gemfile.lock.
    GemfileLock,
    /// Nothing pinned; whatever `pod` is on the host.
    System,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::PodfileLock => write!(f, "Podfile.lock"),
            VersionSource::GemfileLock => write!(f, "Gemfile.lock"),
            VersionSource::System => write!(f, "system"),
        }
    }
}

/// The CocoaPods version a run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolVersion {
    pub source: VersionSource,
    /// `None` only for [`VersionSource::System`].
    pub version: Option<String>,
}

/// How CocoaPods gets installed and invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStrategy {
    /// Install through bundler from the Gemfile.lock and run `bundle exec pod`.
    Wrapped {
        /// Gemfile.lock entry; may be a constraint list.
        version: String,
        /// `BUNDLED WITH` version, when recorded.
        bundler_version: Option<String>,
    },

    /// `gem install cocoapods -v <version>` if missing, then `pod _<version>_`.
    Direct { version: String },

    /// Use the host's `pod` as is.
    System,
}

impl InstallStrategy {
    /// Whether `pod` runs under `bundle exec`.
    pub fn use_wrapper(&self) -> bool {
        matches!(self, InstallStrategy::Wrapped { .. })
    }

    /// The pinned CocoaPods version, if any.
    pub fn version_pin(&self) -> Option<&str> {
        match self {
            InstallStrategy::Wrapped { version, .. } | InstallStrategy::Direct { version } => {
                Some(version)
            }
            InstallStrategy::System => None,
        }
    }
}

/// Podfile.lock and Gemfile.lock disagree on the CocoaPods version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub podfile_lock: String,
    pub gemfile_lock: String,
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cocoapods version required in Podfile.lock ({}) does not match Gemfile.lock ({}). \
             Will install Cocoapods using bundler.",
            self.podfile_lock, self.gemfile_lock
        )
    }
}

/// Outcome of version resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tool: ResolvedToolVersion,
    pub strategy: InstallStrategy,
    pub mismatch: Option<VersionMismatch>,
}

/// Decide the strategy from the Podfile.lock version and the Gemfile.lock entries.
///
/// A Gemfile.lock `cocoapods` entry always wins. When both locks name a version,
/// the Podfile.lock one is checked against the Gemfile.lock constraints and a
/// disagreement is reported in [`Resolution::mismatch`] without changing the
/// outcome. Malformed constraints are an error.
pub fn resolve(
    podfile_lock: Option<&str>,
    gemfile_lock: &GemfileLockVersions,
) -> Result<Resolution> {
    if let Some(gem_version) = &gemfile_lock.cocoapods {
        let mismatch = match podfile_lock {
            Some(pod_version) if !included(pod_version, gem_version)? => Some(VersionMismatch {
                podfile_lock: pod_version.to_string(),
                gemfile_lock: gem_version.clone(),
            }),
            _ => None,
        };

        return Ok(Resolution {
            tool: ResolvedToolVersion {
                source: VersionSource::GemfileLock,
                version: Some(gem_version.clone()),
            },
            strategy: InstallStrategy::Wrapped {
                version: gem_version.clone(),
                bundler_version: gemfile_lock.bundler.clone(),
            },
            mismatch,
        });
    }

    let resolution = match podfile_lock {
        Some(version) => Resolution {
            tool: ResolvedToolVersion {
                source: VersionSource::PodfileLock,
                version: Some(version.to_string()),
            },
            strategy: InstallStrategy::Direct {
                version: version.to_string(),
            },
            mismatch: None,
        },
        None => Resolution {
            tool: ResolvedToolVersion {
                source: VersionSource::System,
                version: None,
            },
            strategy: InstallStrategy::System,
            mismatch: None,
        },
    };
    Ok(resolution)
}
