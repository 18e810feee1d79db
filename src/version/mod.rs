//! Lock file version extraction and RubyGems-style constraint checks.

pub mod constraint;
pub mod lockfile;
pub mod spec;

pub use constraint::{included, satisfies};
pub use lockfile::{
    bundler_version_from_gemfile_lock, cocoapods_version_from_podfile_lock,
    gem_version_from_gemfile_lock, read_gemfile_lock_versions, read_podfile_lock_version,
    GemfileLockVersions,
};
pub use spec::{Operator, VersionSpec};
