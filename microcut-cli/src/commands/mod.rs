//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command; the
//! helpers here cover what `select` and `merge` share: reading detector
//! output and emitting the resulting plan.

pub mod merge;
pub mod select;
pub mod verify;

use log::info;
use microcut_core::file_logging::log_plan;
use microcut_core::SegmentPlan;
use std::io;
use std::path::Path;

use crate::cli::{Cli, Commands, OutputArgs};
use crate::config::base_config;
use crate::error::{CliErrorContext, CliResult};
use crate::output::{print_heading, print_info, print_section, print_segment_table};

/// Runs the parsed command line.
pub fn dispatch(cli: &Cli) -> CliResult<()> {
    let base = base_config(cli.config.as_deref())?;
    match &cli.command {
        Commands::Select(args) => select::run_select(args, base).map(|_| ()),
        Commands::Merge(args) => merge::run_merge(args, base).map(|_| ()),
        Commands::Verify(args) => verify::run_verify(args, base),
    }
}

/// Reads a whole file, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .cli_with_context(|| format!("Failed to read '{}'", path.display())),
        None => io::read_to_string(io::stdin()).cli_with_context(|| "Failed to read stdin"),
    }
}

/// Writes and prints a plan according to the output flags.
///
/// Segments are classified against `[min_duration, max_duration]`.
pub fn emit_plan(
    plan: &SegmentPlan,
    output: &OutputArgs,
    heading: &str,
    details: &[(&str, String)],
    (min_duration, max_duration): (f64, f64),
) -> CliResult<()> {
    let manifest = plan.manifest();
    log_plan(plan, min_duration, max_duration);

    if let Some(path) = &output.manifest {
        manifest
            .write_to_file(path)
            .cli_with_context(|| format!("Failed to write manifest '{}'", path.display()))?;
        info!("Manifest written to {}", path.display());
    }

    if output.json {
        println!("{}", manifest.to_json()?);
        return Ok(());
    }

    print_heading(heading);
    print_info("Segments", plan.len());
    if let Some((start, end)) = plan.span() {
        print_info("Span", format!("{start:.3}s-{end:.3}s"));
    }
    for (label, value) in details {
        print_info(label, value);
    }
    if let Some(path) = &output.manifest {
        print_info("Manifest", path.display());
    }
    print_section("Segments");
    print_segment_table(&manifest, min_duration, max_duration);
    Ok(())
}
