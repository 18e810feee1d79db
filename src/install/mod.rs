//! Install orchestration.
//!
//! - [`strategy`] - version resolution into an [`InstallStrategy`]
//! - [`orchestrator`] - the staged run that executes it

pub mod orchestrator;
pub mod strategy;

pub use orchestrator::{Orchestrator, RunOutcome, Stage};
pub use strategy::{
    resolve, InstallStrategy, Resolution, ResolvedToolVersion, VersionMismatch, VersionSource,
};
