//! Implementation of the 'verify' subcommand.
//!
//! Reloads a manifest, checks that its segments are contiguous and that the
//! recorded indices and durations agree with the ranges, then prints the
//! per-segment status.

use microcut_core::config::CONTIGUITY_TOLERANCE;
use microcut_core::validation::verify_contiguous;
use microcut_core::{CoreError, SegmentManifest, SegmentationConfig};

use crate::cli::VerifyArgs;
use crate::cli_error;
use crate::config::verify_config;
use crate::error::{CliErrorContext, CliResult};
use crate::output::{
    print_heading, print_info, print_section, print_segment_table, print_success, print_warning,
};

/// Checks that entry indices run from zero and durations match `end - start`.
pub fn check_entries(manifest: &SegmentManifest) -> CliResult<()> {
    for (index, entry) in manifest.segments.iter().enumerate() {
        if entry.segment != index {
            return Err(cli_error!("entry {index} is numbered {}", entry.segment));
        }
        let actual = entry.end - entry.start;
        if (entry.duration - actual).abs() > CONTIGUITY_TOLERANCE {
            return Err(CoreError::InvalidInterval(format!(
                "segment {index} records {:.6}s but spans {:.6}s",
                entry.duration, actual
            )));
        }
    }
    Ok(())
}

pub fn run_verify(args: &VerifyArgs, base: SegmentationConfig) -> CliResult<()> {
    let config = verify_config(base, args);
    config.validate()?;

    let manifest = SegmentManifest::load(&args.manifest)
        .cli_with_context(|| format!("Failed to load manifest '{}'", args.manifest.display()))?;
    check_entries(&manifest)?;
    verify_contiguous(&manifest.to_segments())?;

    print_heading("Manifest Check");
    print_info("Manifest", args.manifest.display());
    print_section("Segments");
    print_segment_table(&manifest, config.min_duration, config.max_duration);

    let out_of_range = manifest
        .out_of_range(config.min_duration, config.max_duration)
        .count();
    if out_of_range == 0 {
        print_success("All segments are contiguous and within range");
        return Ok(());
    }

    if args.strict {
        return Err(cli_error!(
            "{} segment(s) outside {:.1}s-{:.1}s",
            out_of_range,
            config.min_duration,
            config.max_duration
        ));
    }
    print_warning(&format!("{out_of_range} segment(s) outside the duration range"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use microcut_core::Interval;

    #[test]
    fn consistent_manifest_passes() {
        let manifest = SegmentManifest::from_segments(&[
            Interval::new(0.0, 50.0),
            Interval::new(50.0, 95.5),
        ]);
        assert!(check_entries(&manifest).is_ok());
    }

    #[test]
    fn tampered_duration_is_reported() {
        let mut manifest = SegmentManifest::from_segments(&[Interval::new(0.0, 50.0)]);
        manifest.segments[0].duration = 40.0;
        assert!(matches!(
            check_entries(&manifest),
            Err(CoreError::InvalidInterval(_))
        ));
    }

    #[test]
    fn misnumbered_entry_is_reported() {
        let mut manifest = SegmentManifest::from_segments(&[
            Interval::new(0.0, 50.0),
            Interval::new(50.0, 100.0),
        ]);
        manifest.segments[1].segment = 5;
        assert!(matches!(
            check_entries(&manifest),
            Err(CoreError::OperationFailed(message)) if message == "entry 1 is numbered 5"
        ));
    }
}
