//! cocoapods-install entry point.

use std::process::ExitCode;

use clap::Parser;
use cocoapods_install::cli::Cli;
use cocoapods_install::config::StepConfig;
use cocoapods_install::install::Orchestrator;
use cocoapods_install::ruby::RubyEnv;
use cocoapods_install::shell::SystemRunner;
use cocoapods_install::ui::{NonInteractiveUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cocoapods_install=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cocoapods_install=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> cocoapods_install::Result<()> {
    let config = StepConfig::from_cli(cli)?;
    config.print(ui)?;

    let runner = SystemRunner;
    let ruby = RubyEnv::detect(&runner);

    Orchestrator::new(&config, &runner, ruby).run(ui)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("cocoapods-install starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = NonInteractiveUI::new();

    match run(&cli, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
