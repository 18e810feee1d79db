//! Provider trait and location types.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Finds a dependency manifest and its lock file.
pub trait DepfileProvider {
    /// Path of the manifest, or `None` when there is none.
    fn dep_file_path(&self) -> Result<Option<PathBuf>>;

    /// Path of the manifest's lock file, or `None` when there is none.
    fn lock_file_path(&self) -> Result<Option<PathBuf>>;

    /// Lock file for a manifest this provider already returned.
    fn lock_file_for(&self, _manifest: &Path) -> Result<Option<PathBuf>> {
        self.lock_file_path()
    }
}

/// A located Podfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocation {
    /// Absolute path of the Podfile.
    pub manifest_path: PathBuf,

    /// `Podfile.lock` next to the Podfile, when committed.
    pub lock_path: Option<PathBuf>,
}

impl ManifestLocation {
    /// Directory holding the Podfile; every command runs from here.
    pub fn dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new("."))
    }
}

/// Gemfile and Gemfile.lock found next to the Podfile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainLocation {
    /// `gems.rb` or `Gemfile`.
    pub gemfile: Option<PathBuf>,

    /// `Gemfile.lock` or `gems.locked`.
    pub gemfile_lock: Option<PathBuf>,
}
