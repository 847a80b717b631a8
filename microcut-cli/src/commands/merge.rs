//! Implementation of the 'merge' subcommand.
//!
//! Reads contiguous scene intervals (file or stdin) and regroups them into
//! segments within the configured duration range.

use log::debug;
use microcut_core::{SegmentPlan, SegmentationConfig, parse_intervals, plan_from_scenes};

use super::{emit_plan, read_input};
use crate::cli::MergeArgs;
use crate::config::merge_config;
use crate::error::{CliErrorContext, CliResult};

pub fn run_merge(args: &MergeArgs, base: SegmentationConfig) -> CliResult<SegmentPlan> {
    let config = merge_config(base, args);
    config.validate()?;

    let source = match &args.intervals {
        Some(path) => path.display().to_string(),
        None => "stdin".to_string(),
    };
    let intervals =
        parse_intervals(&read_input(args.intervals.as_deref())?).for_input(&source)?;
    debug!("Loaded {} scene(s) from {}", intervals.len(), source);

    let plan = plan_from_scenes(&config, &intervals)?;

    let details = [
        ("Scenes", intervals.len().to_string()),
        (
            "Range",
            format!("{:.3}s-{:.3}s", config.min_duration, config.max_duration),
        ),
        ("Remainder", format!("{:?}", config.remainder_policy)),
    ];
    emit_plan(
        &plan,
        &args.output,
        "Scene Merge",
        &details,
        (config.min_duration, config.max_duration),
    )?;
    Ok(plan)
}
