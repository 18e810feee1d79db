//! CLI argument definitions.
//!
//! Every step input can be given as a flag or through the environment
//! variable the host pipeline exports for it.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Installs the CocoaPods version a project requires, then runs `pod install`.
#[derive(Debug, Parser)]
#[command(name = "cocoapods-install")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to search for a Podfile in
    #[arg(long, env = "source_root_path", default_value = ".")]
    pub source_root_path: PathBuf,

    /// Podfile to use instead of searching the source root
    #[arg(long, env = "podfile_path")]
    pub podfile_path: Option<PathBuf>,

    /// Pass --verbose to pod install (true/false)
    #[arg(
        long,
        env = "verbose",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = bool_input(),
    )]
    pub verbose: bool,

    /// Skip declaring Pods/ for the pipeline cache (true/false)
    #[arg(
        long,
        env = "is_cache_disabled",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = bool_input(),
    )]
    pub is_cache_disabled: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Step booleans are the literal strings `true` and `false`.
fn bool_input() -> impl TypedValueParser<Value = bool> {
    PossibleValuesParser::new(["true", "false"]).map(|s| s == "true")
}
