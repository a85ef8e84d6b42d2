//! adw-health CLI entry point.

use std::process::ExitCode;

use adw_health::cli::{Cli, CommandDispatcher};
use adw_health::ui::{create_ui, OutputMode};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("adw_health=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("adw_health=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("adw-health starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.json);
    let mut ui = create_ui(output_mode, cli.no_color);

    let cwd = std::env::current_dir().unwrap_or_default();
    let dispatcher = CommandDispatcher::new(cwd);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            if cli.json {
                eprintln!("Error: {}", e);
            } else {
                ui.error(&format!("Error: {}", e));
            }
            ExitCode::from(1)
        }
    }
}
