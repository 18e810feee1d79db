//! CocoaPods install step.
//!
//! Finds a project's Podfile, works out which CocoaPods version the project
//! needs from `Podfile.lock` and `Gemfile.lock`, installs that version
//! (through bundler when a Gemfile.lock pins it), and runs `pod install`.
//!
//! # Modules
//!
//! - [`cache`] - Pods cache declaration for the host pipeline
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Validated step inputs
//! - [`error`] - Error types and result aliases
//! - [`install`] - Version resolution and the install run
//! - [`locator`] - Podfile, Podfile.lock and Gemfile discovery
//! - [`ruby`] - Ruby install type, gem and bundler commands, rbenv
//! - [`shell`] - External command execution
//! - [`ui`] - Step log output
//! - [`version`] - Lock file parsing and version constraints
//!
//! # Example
//!
//! ```
//! use cocoapods_install::version::{cocoapods_version_from_podfile_lock, included};
//!
//! let lock = "PODS:\n  - Alamofire (5.4.1)\n\nCOCOAPODS: 1.10.1\n";
//! let version = cocoapods_version_from_podfile_lock(lock).unwrap();
//! assert!(included(&version, ">= 1.8.0, < 2.0.0").unwrap());
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod locator;
pub mod ruby;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{InstallError, Result};
