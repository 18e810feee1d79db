//! Directory scan for Podfiles.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// File name of the CocoaPods manifest.
pub const PODFILE: &str = "Podfile";

/// Directory components that never contain the project's own Podfile.
const EXCLUDED_DIRS: &[&str] = &["Pods", "Carthage", ".git"];

/// Extension of framework bundles, which may vendor their own Podfile.
const FRAMEWORK_EXTENSION: &str = "framework";

/// All Podfiles under `root`, shallowest first, then alphabetically.
///
/// Paths under `Pods/`, `Carthage/`, `.git/` and any `*.framework` bundle are
/// skipped. Only components below `root` are checked. A `Podfile` symlink
/// counts when it points at a file; directory symlinks are not followed.
pub fn find_podfiles(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e));

    for entry in walker {
        let entry = entry.map_err(anyhow::Error::from)?;
        if is_podfile(&entry) {
            found.push(entry.into_path());
        }
    }

    found.sort_by(|a, b| compare_by_components(a, b));
    tracing::debug!("found {} Podfile(s) under {}", found.len(), root.display());
    Ok(found)
}

fn is_podfile(entry: &DirEntry) -> bool {
    if entry.file_name() != PODFILE {
        return false;
    }
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn is_excluded(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    EXCLUDED_DIRS.contains(&name.as_ref()) || is_framework(entry.path())
}

fn is_framework(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == FRAMEWORK_EXTENSION)
}

fn component_count(path: &Path) -> usize {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}

/// Fewer components first; ties broken lexically.
pub fn compare_by_components(a: &Path, b: &Path) -> Ordering {
    component_count(a)
        .cmp(&component_count(b))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative(root: &Path, paths: Vec<PathBuf>) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn skips_excluded_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ios/App/Podfile");
        touch(temp.path(), "Pods/Podfile");
        touch(temp.path(), "ios/App/Pods/Podfile");
        touch(temp.path(), "Carthage/Checkouts/Lib/Podfile");
        touch(temp.path(), ".git/Podfile");
        touch(temp.path(), "Vendor/Some.framework/Podfile");

        let found = find_podfiles(temp.path()).unwrap();
        assert_eq!(relative(temp.path(), found), vec!["ios/App/Podfile"]);
    }

    #[test]
    fn shallowest_then_alphabetical() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b/Podfile");
        touch(temp.path(), "a/deep/Podfile");
        touch(temp.path(), "a/Podfile");

        let found = find_podfiles(temp.path()).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec!["a/Podfile", "b/Podfile", "a/deep/Podfile"]
        );
    }

    #[test]
    fn ignores_similarly_named_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Podfile.lock");
        touch(temp.path(), "MyPodfile");

        assert!(find_podfiles(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn root_named_like_excluded_dir_still_scanned() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Pods");
        touch(&root, "Podfile");

        let found = find_podfiles(&root).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn accepts_symlinked_podfile() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "shared/Podfile");
        fs::create_dir_all(temp.path().join("ios")).unwrap();
        std::os::unix::fs::symlink(
            temp.path().join("shared/Podfile"),
            temp.path().join("ios/Podfile"),
        )
        .unwrap();

        let found = find_podfiles(temp.path()).unwrap();
        assert_eq!(
            relative(temp.path(), found),
            vec!["ios/Podfile", "shared/Podfile"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn skips_dangling_podfile_symlink() {
        let temp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone"), temp.path().join("Podfile")).unwrap();

        assert!(find_podfiles(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn compare_by_components_orders_depth_first() {
        assert_eq!(
            compare_by_components(Path::new("z/Podfile"), Path::new("a/b/Podfile")),
            Ordering::Less
        );
        assert_eq!(
            compare_by_components(Path::new("a/Podfile"), Path::new("b/Podfile")),
            Ordering::Less
        );
    }
}
