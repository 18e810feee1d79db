//! Podfile, Podfile.lock and Gemfile discovery.
//!
//! - [`podfile`] - explicit-path and directory-scan Podfile providers
//! - [`gemfile`] - Gemfile / Gemfile.lock next to the Podfile
//! - [`walk`] - the directory scan and its exclusion rules

pub mod gemfile;
pub mod podfile;
pub mod types;
pub mod walk;

pub use gemfile::GemfileProvider;
pub use podfile::{podfile_provider, InputPodfileProvider, ScanPodfileProvider, PODFILE_LOCK};
pub use types::{DepfileProvider, ManifestLocation, ToolchainLocation};
pub use walk::{find_podfiles, PODFILE};

use std::path::Path;

use crate::error::Result;

/// Resolve the Podfile through `provider`, then the lock next to it.
///
/// `Ok(None)` means no Podfile was found; the caller decides whether that is fatal.
pub fn locate_podfile(provider: &dyn DepfileProvider) -> Result<Option<ManifestLocation>> {
    let Some(manifest_path) = provider.dep_file_path()? else {
        return Ok(None);
    };
    let lock_path = provider.lock_file_for(&manifest_path)?;
    Ok(Some(ManifestLocation {
        manifest_path,
        lock_path,
    }))
}

/// Resolve the Gemfile and Gemfile.lock in `dir`.
pub fn locate_toolchain(dir: &Path) -> Result<ToolchainLocation> {
    let provider = GemfileProvider::new(dir);
    Ok(ToolchainLocation {
        gemfile: provider.dep_file_path()?,
        gemfile_lock: provider.lock_file_path()?,
    })
}
