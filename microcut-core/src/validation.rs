//! Coverage checks for planned segments.
//!
//! Every plan must partition its span exactly: contiguous segments, no gaps
//! or overlaps, first start and last end on the span edges.

use log::debug;

use crate::config::CONTIGUITY_TOLERANCE;
use crate::error::{CoreError, CoreResult};
use crate::merger::validate_intervals;
use crate::types::Segment;

/// Checks that `segments` partition `[expected_start, expected_end)`.
///
/// An empty segment list is only accepted for an empty span.
pub fn verify_partition(
    segments: &[Segment],
    expected_start: f64,
    expected_end: f64,
) -> CoreResult<()> {
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        if expected_end > expected_start {
            return Err(CoreError::CoverageMismatch {
                expected_start,
                expected_end,
                actual_start: expected_start,
                actual_end: expected_start,
            });
        }
        return Ok(());
    };

    validate_intervals(segments)?;

    if (first.start - expected_start).abs() > CONTIGUITY_TOLERANCE
        || (last.end - expected_end).abs() > CONTIGUITY_TOLERANCE
    {
        return Err(CoreError::CoverageMismatch {
            expected_start,
            expected_end,
            actual_start: first.start,
            actual_end: last.end,
        });
    }

    debug!(
        "Verified {} segment(s) covering {:.3}s-{:.3}s",
        segments.len(),
        expected_start,
        expected_end
    );
    Ok(())
}

/// Checks that `segments` are well formed and contiguous, whatever span they
/// cover.
pub fn verify_contiguous(segments: &[Segment]) -> CoreResult<()> {
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => verify_partition(segments, first.start, last.end),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_partition() {
        let segments = [Segment::new(0.0, 10.0), Segment::new(10.0, 25.0)];
        assert!(verify_partition(&segments, 0.0, 25.0).is_ok());
    }

    #[test]
    fn rejects_short_coverage() {
        let segments = [Segment::new(0.0, 10.0)];
        assert!(matches!(
            verify_partition(&segments, 0.0, 25.0),
            Err(CoreError::CoverageMismatch { .. })
        ));
    }

    #[test]
    fn rejects_overlap() {
        let segments = [Segment::new(0.0, 10.0), Segment::new(9.0, 25.0)];
        assert!(matches!(
            verify_contiguous(&segments),
            Err(CoreError::InvalidInterval(_))
        ));
    }

    #[test]
    fn empty_plan_only_for_empty_span() {
        assert!(verify_partition(&[], 0.0, 0.0).is_ok());
        assert!(verify_partition(&[], 0.0, 5.0).is_err());
    }
}
