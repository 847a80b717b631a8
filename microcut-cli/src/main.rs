// ============================================================================
// microcut-cli/src/main.rs
// ============================================================================
//
// MICROCUT CLI: Main Entry Point
//
// Parses the command line, installs one logging backend and hands the
// command to `dispatch`. Any error ends the process with exit code 1 and a
// red `Error:` line on stderr.

use clap::Parser;
use log::{LevelFilter, debug};
use microcut_cli::logging::{console_level, init_console_logging, log_file_path};
use microcut_cli::output::print_error;
use microcut_cli::{Cli, CliErrorContext, CliResult, dispatch};
use microcut_core::CoreError;
use microcut_core::file_logging::setup_file_logging;
use std::fs;
use std::process;

fn init_logging(cli: &Cli) -> CliResult<()> {
    let Some(log_dir) = &cli.log_dir else {
        init_console_logging(console_level(cli.verbose, cli.command.json_output()));
        return Ok(());
    };

    fs::create_dir_all(log_dir)
        .cli_with_context(|| format!("Failed to create log directory '{}'", log_dir.display()))?;
    let log_path = log_file_path(log_dir, cli.command.name());
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    setup_file_logging(&log_path, level).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to set up log file '{}': {:#}",
            log_path.display(),
            e
        ))
    })?;
    debug!("Logging to {}", log_path.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = init_logging(&cli).and_then(|()| dispatch(&cli));
    if let Err(e) = result {
        print_error(&e.to_string());
        process::exit(1);
    }
}
