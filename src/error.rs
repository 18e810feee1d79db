//! Error types for the install step.
//!
//! This module defines [`InstallError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal for the run; `main` prints it and exits non-zero
//! - Conditions that only degrade version resolution (missing lock files) are
//!   not errors and are reported as warnings instead
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the install step.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The Podfile does not exist (explicit path) or none was found.
    #[error("Podfile not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A step input failed validation.
    #[error("Invalid input: {message}")]
    InputInvalid { message: String },

    /// The candidate version has fewer components than the constraint needs.
    #[error("Version '{version}' is too short to compare against '{constraint}'")]
    MalformedVersion { version: String, constraint: String },

    /// A constraint token carries an operator we do not understand.
    #[error("Unknown version operator: {token}")]
    UnknownOperator { token: String },

    /// A constraint token has more than an operator and a version.
    #[error("Invalid version range: {token}")]
    InvalidConstraint { token: String },

    /// A version component is not numeric.
    #[error("Invalid version component '{component}': {source}")]
    Parse {
        component: String,
        #[source]
        source: ParseIntError,
    },

    /// An external command exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command could not be started.
    #[error("Failed to start command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for install step operations.
pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = InstallError::ManifestNotFound {
            path: PathBuf::from("/app/ios/Podfile"),
        };
        assert!(err.to_string().contains("/app/ios/Podfile"));
    }

    #[test]
    fn unknown_operator_displays_token() {
        let err = InstallError::UnknownOperator {
            token: "?? 1.9.0".into(),
        };
        assert_eq!(err.to_string(), "Unknown version operator: ?? 1.9.0");
    }

    #[test]
    fn malformed_version_displays_both_sides() {
        let err = InstallError::MalformedVersion {
            version: "1.9".into(),
            constraint: ">= 1.8.0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.9"));
        assert!(msg.contains(">= 1.8.0"));
    }

    #[test]
    fn parse_error_keeps_component() {
        let source = "x".parse::<u64>().unwrap_err();
        let err = InstallError::Parse {
            component: "x".into(),
            source,
        };
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = InstallError::CommandFailed {
            command: "pod install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pod install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallError = io_err.into();
        assert!(matches!(err, InstallError::Io(_)));
    }
}
