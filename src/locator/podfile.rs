//! Podfile providers: an explicit input path or a scan of the source root.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

use super::types::DepfileProvider;
use super::walk::find_podfiles;

/// File name of the CocoaPods lock file.
pub const PODFILE_LOCK: &str = "Podfile.lock";

/// Podfile given explicitly by the `podfile_path` input.
#[derive(Debug, Clone)]
pub struct InputPodfileProvider {
    podfile: PathBuf,
}

impl InputPodfileProvider {
    pub fn new(podfile: impl Into<PathBuf>) -> Self {
        Self {
            podfile: podfile.into(),
        }
    }
}

impl DepfileProvider for InputPodfileProvider {
    fn dep_file_path(&self) -> Result<Option<PathBuf>> {
        let path = std::path::absolute(&self.podfile)?;
        if !path.exists() {
            return Err(InstallError::ManifestNotFound { path });
        }
        Ok(Some(path))
    }

    fn lock_file_path(&self) -> Result<Option<PathBuf>> {
        match self.dep_file_path()? {
            Some(podfile) => self.lock_file_for(&podfile),
            None => Ok(None),
        }
    }

    fn lock_file_for(&self, podfile: &Path) -> Result<Option<PathBuf>> {
        Ok(sibling_lock(podfile))
    }
}

/// First Podfile found by scanning a directory tree.
#[derive(Debug, Clone)]
pub struct ScanPodfileProvider {
    root: PathBuf,
}

impl ScanPodfileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DepfileProvider for ScanPodfileProvider {
    fn dep_file_path(&self) -> Result<Option<PathBuf>> {
        let root = std::path::absolute(&self.root)?;
        Ok(find_podfiles(&root)?.into_iter().next())
    }

    fn lock_file_path(&self) -> Result<Option<PathBuf>> {
        match self.dep_file_path()? {
            Some(podfile) => self.lock_file_for(&podfile),
            None => Ok(None),
        }
    }

    fn lock_file_for(&self, podfile: &Path) -> Result<Option<PathBuf>> {
        Ok(sibling_lock(podfile))
    }
}

/// Pick the provider once: explicit path when given, otherwise a scan.
pub fn podfile_provider(
    podfile_path: Option<&Path>,
    source_root: &Path,
) -> Box<dyn DepfileProvider> {
    match podfile_path {
        Some(path) => Box::new(InputPodfileProvider::new(path)),
        None => Box::new(ScanPodfileProvider::new(source_root)),
    }
}

fn sibling_lock(podfile: &Path) -> Option<PathBuf> {
    let lock = podfile.parent()?.join(PODFILE_LOCK);
    lock.is_file().then_some(lock)
}
