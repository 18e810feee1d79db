//! Gemfile lookup next to the Podfile.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::types::DepfileProvider;

/// Recognized Gemfile names, first match wins.
pub const GEMFILE_NAMES: &[&str] = &["gems.rb", "Gemfile"];

/// Recognized Gemfile lock names, first match wins.
pub const GEMFILE_LOCK_NAMES: &[&str] = &["Gemfile.lock", "gems.locked"];

/// Gemfile and lock in a fixed directory.
#[derive(Debug, Clone)]
pub struct GemfileProvider {
    dir: PathBuf,
}

impl GemfileProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DepfileProvider for GemfileProvider {
    fn dep_file_path(&self) -> Result<Option<PathBuf>> {
        first_existing(&self.dir, GEMFILE_NAMES)
    }

    fn lock_file_path(&self) -> Result<Option<PathBuf>> {
        first_existing(&self.dir, GEMFILE_LOCK_NAMES)
    }
}

/// First of `names` that exists in `dir`. Errors other than "not found" propagate.
fn first_existing(dir: &Path, names: &[&str]) -> Result<Option<PathBuf>> {
    for name in names {
        let path = dir.join(name);
        match std::fs::metadata(&path) {
            Ok(_) => return Ok(Some(path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefers_gems_rb() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Gemfile"), "").unwrap();
        fs::write(temp.path().join("gems.rb"), "").unwrap();

        let provider = GemfileProvider::new(temp.path());
        assert_eq!(
            provider.dep_file_path().unwrap(),
            Some(temp.path().join("gems.rb"))
        );
    }

    #[test]
    fn prefers_gemfile_lock() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("gems.locked"), "").unwrap();
        fs::write(temp.path().join("Gemfile.lock"), "").unwrap();

        let provider = GemfileProvider::new(temp.path());
        assert_eq!(
            provider.lock_file_path().unwrap(),
            Some(temp.path().join("Gemfile.lock"))
        );
    }

    #[test]
    fn falls_back_to_gems_locked() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("gems.locked"), "").unwrap();

        let provider = GemfileProvider::new(temp.path());
        assert_eq!(
            provider.lock_file_path().unwrap(),
            Some(temp.path().join("gems.locked"))
        );
    }

    #[test]
    fn nothing_present() {
        let temp = TempDir::new().unwrap();
        let provider = GemfileProvider::new(temp.path());
        assert_eq!(provider.dep_file_path().unwrap(), None);
        assert_eq!(provider.lock_file_path().unwrap(), None);
    }
}
