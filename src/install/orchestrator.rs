//! The install run: locate, resolve, install, verify, `pod install`.

use std::path::Path;

use crate::cache;
use crate::config::StepConfig;
use crate::error::{InstallError, Result};
use crate::locator::{locate_podfile, locate_toolchain, podfile_provider, ManifestLocation};
use crate::ruby::{
    bundle_exec, bundle_install, gem_install, install_bundler, install_ruby, is_gem_installed,
    selected_ruby, RubyEnv, RubyInstallType,
};
use crate::shell::{is_ci, CommandLine, CommandResult, CommandRunner};
use crate::ui::UserInterface;
use crate::version::{read_gemfile_lock_versions, read_podfile_lock_version, GemfileLockVersions};

use super::strategy::{resolve, InstallStrategy, Resolution};

/// Stages of a run, in order. Used for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Locating,
    VersionResolving,
    RubyCheck,
    Installing,
    Verifying,
    InstallingDependencies,
    RepoUpdateRetry,
    CollectingCache,
    Done,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub location: ManifestLocation,
    pub resolution: Resolution,
    /// The fast `pod install` failed and the repo-update retry ran.
    pub repo_updated: bool,
    /// Cache entry that was published, if any.
    pub cache_key: Option<String>,
}

/// Drives one install run against a [`CommandRunner`].
pub struct Orchestrator<'a> {
    config: &'a StepConfig,
    runner: &'a dyn CommandRunner,
    ruby: RubyEnv,
    ci: bool,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a StepConfig, runner: &'a dyn CommandRunner, ruby: RubyEnv) -> Self {
        Self {
            config,
            runner,
            ruby,
            ci: is_ci(),
        }
    }

    /// Override CI detection.
    pub fn with_ci(mut self, ci: bool) -> Self {
        self.ci = ci;
        self
    }

    /// Run every stage. Any error is fatal except a failed fast `pod install`,
    /// which falls back to `pod repo update` and a full `pod install`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        enter(Stage::Locating);
        let location = self.locate(ui)?;
        let dir = location.dir().to_path_buf();

        enter(Stage::VersionResolving);
        let resolution = self.resolve_version(ui, &location)?;

        if self.ci && self.ruby.install_type == RubyInstallType::Rbenv {
            enter(Stage::RubyCheck);
            self.check_rbenv_ruby(ui);
        }

        enter(Stage::Installing);
        let pod = self.install(ui, &resolution.strategy, &dir)?;

        enter(Stage::Verifying);
        ui.show_header("cocoapods version:");
        self.execute(ui, &pod.clone().arg("--version").current_dir(&dir))?;

        enter(Stage::InstallingDependencies);
        let repo_updated = self.pod_install(ui, &pod, &dir)?;

        let cache_key = match &location.lock_path {
            Some(lock) if !self.config.is_cache_disabled => {
                enter(Stage::CollectingCache);
                self.collect_cache(ui, &dir, lock)
            }
            _ => None,
        };

        enter(Stage::Done);
        ui.success("Success!");

        Ok(RunOutcome {
            location,
            resolution,
            repo_updated,
            cache_key,
        })
    }

    fn locate(&self, ui: &mut dyn UserInterface) -> Result<ManifestLocation> {
        ui.show_header("Searching for Podfile");

        let provider = podfile_provider(
            self.config.podfile_path.as_deref(),
            &self.config.source_root_path,
        );
        let location =
            locate_podfile(provider.as_ref())?.ok_or_else(|| InstallError::ManifestNotFound {
                path: self.config.source_root_path.join(crate::locator::PODFILE),
            })?;

        ui.success(&format!("Using Podfile: {}", location.manifest_path.display()));
        match &location.lock_path {
            Some(lock) => ui.success(&format!("Using Podfile.lock: {}", lock.display())),
            None => {
                ui.warning("No Podfile.lock found");
                ui.warning("Make sure it's committed into your repository!");
            }
        }

        Ok(location)
    }

    fn resolve_version(
        &self,
        ui: &mut dyn UserInterface,
        location: &ManifestLocation,
    ) -> Result<Resolution> {
        ui.show_header("Determining required cocoapods version");

        let podfile_version = match &location.lock_path {
            Some(lock) => {
                let version = read_podfile_lock_version(lock)?;
                match &version {
                    Some(v) => ui.success(&format!(
                        "Required CocoaPods version (from Podfile.lock): {}",
                        v
                    )),
                    None => ui.warning(&format!(
                        "No CocoaPods version found in Podfile.lock! ({})",
                        lock.display()
                    )),
                }
                version
            }
            None => None,
        };

        let toolchain = locate_toolchain(location.dir())?;
        match &toolchain.gemfile {
            Some(gemfile) => ui.success(&format!("Using Gemfile: {}", gemfile.display())),
            None => ui.warning("No Gemfile found"),
        }

        let gemfile_versions = match &toolchain.gemfile_lock {
            Some(lock) => {
                ui.success(&format!("Using Gemfile.lock: {}", lock.display()));
                let versions = read_gemfile_lock_versions(lock)?;
                if let Some(v) = &versions.cocoapods {
                    ui.success(&format!(
                        "Required CocoaPods version (from gem lockfile): {}",
                        v
                    ));
                }
                versions
            }
            None => {
                ui.warning("No Gemfile.lock found");
                GemfileLockVersions::default()
            }
        };

        let resolution = resolve(podfile_version.as_deref(), &gemfile_versions)?;
        if let Some(mismatch) = &resolution.mismatch {
            ui.warning(&mismatch.to_string());
        }
        if resolution.strategy == InstallStrategy::System {
            ui.success("Using system installed CocoaPods version");
        }
        tracing::debug!("resolved {:?}", resolution.tool);

        Ok(resolution)
    }

    /// Make sure the Ruby rbenv selects for the source root is installed.
    /// Nothing here stops the run; problems are reported as errors.
    fn check_rbenv_ruby(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Check selected Ruby is installed");

        match selected_ruby(self.runner, &self.config.source_root_path) {
            Ok(Some(ruby)) if ruby.installed => {
                ui.success(&format!("Ruby {} is installed", ruby.version));
            }
            Ok(Some(ruby)) => {
                ui.error(&format!("Ruby {} is not installed", ruby.version));
                let cmd = install_ruby(&ruby.version);
                if let Err(e) = self.execute(ui, &cmd) {
                    ui.error(&format!(
                        "Failed to install Ruby version {}, error: {}",
                        ruby.version, e
                    ));
                }
            }
            Ok(None) => {
                ui.error("Failed to check if selected ruby is installed: no version reported")
            }
            Err(e) => ui.error(&format!(
                "Failed to check if selected ruby is installed, error: {}",
                e
            )),
        }
    }

    /// Install CocoaPods per `strategy` and return the base `pod` command.
    fn install(
        &self,
        ui: &mut dyn UserInterface,
        strategy: &InstallStrategy,
        dir: &Path,
    ) -> Result<CommandLine> {
        ui.show_header("Installing cocoapods");

        match strategy {
            InstallStrategy::Wrapped {
                bundler_version, ..
            } => {
                let bundler = bundler_version.as_deref();

                ui.message("Installing bundler");
                self.execute(ui, &install_bundler(&self.ruby, bundler).current_dir(dir))?;

                ui.message("Installing cocoapods with bundler");
                self.execute(ui, &bundle_install(&self.ruby, bundler).current_dir(dir))?;

                Ok(bundle_exec(bundler).arg("pod"))
            }
            InstallStrategy::Direct { version } => {
                ui.message(&format!("Checking cocoapods {} gem", version));

                if is_gem_installed(self.runner, "cocoapods", version)? {
                    ui.message("Installed");
                } else {
                    ui.message("Installing");
                    for cmd in gem_install(&self.ruby, "cocoapods", Some(version)) {
                        self.execute(ui, &cmd.current_dir(dir))?;
                    }
                }

                Ok(CommandLine::new("pod").arg(format!("_{}_", version)))
            }
            InstallStrategy::System => {
                ui.message("Using system installed cocoapods");
                Ok(CommandLine::new("pod"))
            }
        }
    }

    /// `pod install --no-repo-update`, falling back to `pod repo update` and
    /// a full `pod install`. Returns whether the fallback ran.
    fn pod_install(
        &self,
        ui: &mut dyn UserInterface,
        pod: &CommandLine,
        dir: &Path,
    ) -> Result<bool> {
        ui.show_header("Installing Pods");

        let fast = self.with_verbose(pod.clone().args(&["install", "--no-repo-update"]));
        if let Err(e) = self.execute(ui, &fast.current_dir(dir)) {
            enter(Stage::RepoUpdateRetry);
            ui.warning(&format!(
                "Command failed, error: {}, retrying without --no-repo-update ...",
                e
            ));

            self.execute(ui, &pod.clone().args(&["repo", "update"]).current_dir(dir))?;

            let full = self.with_verbose(pod.clone().arg("install"));
            self.execute(ui, &full.current_dir(dir))?;
            return Ok(true);
        }

        Ok(false)
    }

    fn with_verbose(&self, cmd: CommandLine) -> CommandLine {
        if self.config.verbose {
            cmd.arg("--verbose")
        } else {
            cmd
        }
    }

    fn collect_cache(
        &self,
        ui: &mut dyn UserInterface,
        dir: &Path,
        lock: &Path,
    ) -> Option<String> {
        ui.show_header("Collecting Pod cache paths...");

        let key = cache::include_path_key(dir, lock);
        match cache::commit(self.runner, std::slice::from_ref(&key)) {
            Ok(()) => Some(key),
            Err(e) => {
                tracing::debug!("cache commit failed: {}", e);
                ui.warning("Cache collection skipped: failed to commit cache paths.");
                None
            }
        }
    }

    /// Echo `cmd`, run it with live output, and fail on a non-zero exit.
    fn execute(&self, ui: &mut dyn UserInterface, cmd: &CommandLine) -> Result<CommandResult> {
        ui.command(&cmd.printable());
        self.runner.run(cmd)?.check(cmd)
    }
}

fn enter(stage: Stage) {
    tracing::debug!("stage: {:?}", stage);
}
