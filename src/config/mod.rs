//! Validated step configuration.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::Cli;
use crate::error::{InstallError, Result};
use crate::ui::UserInterface;

/// Step inputs after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepConfig {
    /// Directory scanned for a Podfile.
    pub source_root_path: PathBuf,
    /// Explicit Podfile; skips the scan.
    pub podfile_path: Option<PathBuf>,
    /// Pass `--verbose` to `pod install`.
    pub verbose: bool,
    /// Skip the cache declaration.
    pub is_cache_disabled: bool,
}

impl StepConfig {
    /// Validate CLI/env inputs. Empty paths count as unset.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_root_path = if cli.source_root_path.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            cli.source_root_path.clone()
        };
        let podfile_path = cli
            .podfile_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty());

        let config = Self {
            source_root_path,
            podfile_path,
            verbose: cli.verbose,
            is_cache_disabled: cli.is_cache_disabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the source root is a directory and an explicit Podfile exists.
    pub fn validate(&self) -> Result<()> {
        if !self.source_root_path.is_dir() {
            return Err(InstallError::InputInvalid {
                message: format!(
                    "source_root_path is not a directory: {}",
                    self.source_root_path.display()
                ),
            });
        }

        if let Some(podfile) = &self.podfile_path {
            if !podfile.exists() {
                return Err(InstallError::ManifestNotFound {
                    path: podfile.clone(),
                });
            }
        }

        Ok(())
    }

    /// Print a `Config:` section with one line per input.
    pub fn print(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let value = serde_json::to_value(self).map_err(anyhow::Error::from)?;
        ui.show_header("Config:");
        if let serde_json::Value::Object(fields) = value {
            for (key, value) in fields {
                let shown = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                ui.key_value(&key, &shown);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["cocoapods-install"];
        argv.extend(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn valid_source_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_string_lossy().to_string();
        let config = StepConfig::from_cli(&cli(&["--source-root-path", &root])).unwrap();
        assert_eq!(config.source_root_path, temp.path());
        assert_eq!(config.podfile_path, None);
    }

    #[test]
    fn missing_source_root_is_invalid() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nope").to_string_lossy().to_string();
        let err = StepConfig::from_cli(&cli(&["--source-root-path", &root])).unwrap_err();
        assert!(matches!(err, InstallError::InputInvalid { .. }));
    }

    #[test]
    fn missing_explicit_podfile_is_not_found() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_string_lossy().to_string();
        let podfile = temp.path().join("Podfile").to_string_lossy().to_string();
        let err = StepConfig::from_cli(&cli(&[
            "--source-root-path",
            &root,
            "--podfile-path",
            &podfile,
        ]))
        .unwrap_err();
        assert!(matches!(err, InstallError::ManifestNotFound { .. }));
    }

    #[test]
    fn existing_explicit_podfile_is_kept() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Podfile"), "").unwrap();
        let root = temp.path().to_string_lossy().to_string();
        let podfile = temp.path().join("Podfile").to_string_lossy().to_string();
        let config = StepConfig::from_cli(&cli(&[
            "--source-root-path",
            &root,
            "--podfile-path",
            &podfile,
        ]))
        .unwrap();
        assert_eq!(config.podfile_path, Some(temp.path().join("Podfile")));
    }

    #[test]
    fn print_lists_every_input() {
        let config = StepConfig {
            source_root_path: PathBuf::from("/src"),
            podfile_path: None,
            verbose: true,
            is_cache_disabled: false,
        };
        let mut ui = MockUI::new();
        config.print(&mut ui).unwrap();

        assert_eq!(ui.headers(), ["Config:"]);
        let kv = ui.key_values();
        assert!(kv.contains(&("source_root_path".to_string(), "/src".to_string())));
        assert!(kv.contains(&("podfile_path".to_string(), String::new())));
        assert!(kv.contains(&("verbose".to_string(), "true".to_string())));
        assert!(kv.contains(&("is_cache_disabled".to_string(), "false".to_string())));
    }
}
