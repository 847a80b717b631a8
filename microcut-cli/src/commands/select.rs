//! Implementation of the 'select' subcommand.
//!
//! Reads change points from one or more detector files (or stdin), selects
//! boundaries near the target length and reports the resulting segments.

use log::debug;
use microcut_core::{
    ChangePoint, SegmentPlan, SegmentationConfig, parse_change_points, plan_from_change_points,
};

use super::{emit_plan, read_input};
use crate::cli::SelectArgs;
use crate::config::select_config;
use crate::error::{CliErrorContext, CliResult};

/// Range a selected segment is expected to fall in: the target plus or
/// minus the snapping tolerance.
pub fn expected_range(config: &SegmentationConfig) -> (f64, f64) {
    let tolerance = config.target_duration * config.snap_tolerance_ratio;
    (config.target_duration - tolerance, config.target_duration + tolerance)
}

/// Loads every `--points` file, or stdin when none was given.
fn load_sources(args: &SelectArgs) -> CliResult<Vec<Vec<ChangePoint>>> {
    if args.points.is_empty() {
        debug!("Reading change points from stdin");
        let points = parse_change_points(&read_input(None)?).for_input("stdin")?;
        return Ok(vec![points]);
    }

    args.points
        .iter()
        .map(|path| -> CliResult<Vec<ChangePoint>> {
            let points = parse_change_points(&read_input(Some(path))?)
                .for_input(&path.display().to_string())?;
            debug!("Loaded {} change point(s) from {}", points.len(), path.display());
            Ok(points)
        })
        .collect()
}

pub fn run_select(args: &SelectArgs, base: SegmentationConfig) -> CliResult<SegmentPlan> {
    let config = select_config(base, args);
    config.validate()?;

    let sources = load_sources(args)?;
    let source_refs: Vec<&[ChangePoint]> = sources.iter().map(Vec::as_slice).collect();
    let plan = plan_from_change_points(&config, args.duration, &source_refs)?;

    let details = [
        ("Duration", format!("{:.3}s", args.duration)),
        ("Target", format!("{:.3}s", config.target_duration)),
        (
            "Change points",
            format!(
                "{} from {} source(s)",
                sources.iter().map(Vec::len).sum::<usize>(),
                sources.len()
            ),
        ),
    ];
    emit_plan(
        &plan,
        &args.output,
        "Boundary Selection",
        &details,
        expected_range(&config),
    )?;
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_range_follows_tolerance() {
        let config = SegmentationConfig {
            target_duration: 100.0,
            snap_tolerance_ratio: 0.25,
            ..Default::default()
        };
        assert_eq!(expected_range(&config), (75.0, 125.0));
    }
}
