// ============================================================================
// microcut-core/src/planner.rs
// ============================================================================
//
// SEGMENT PLANNING: Entry Points Combining Algorithms and Checks
//
// This module ties the two planning algorithms to a SegmentationConfig and
// verifies that every result partitions its span before handing it back.
//
// KEY COMPONENTS:
// - PlanRequest: Point-event (change points) or interval-event (scenes) input
// - SegmentPlan: The resulting segments and the strategy that produced them
// - plan / plan_batch: Single and parallel planning
//
// Planning is pure and holds no shared state, so `plan_batch` runs requests
// on the rayon thread pool.

// ---- External crate imports ----
use log::{debug, info};
use rayon::prelude::*;

// ---- Internal crate imports ----
use crate::boundaries::{boundaries_to_segments, BoundarySelector};
use crate::config::SegmentationConfig;
use crate::error::CoreResult;
use crate::manifest::SegmentManifest;
use crate::merger::DurationMerger;
use crate::types::{ChangePoint, Interval, Segment};
use crate::validation::verify_partition;

/// Input for a single planning run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanRequest {
    /// Point events from one or more detectors over a video of known length
    ChangePoints {
        total_duration: f64,
        sources: Vec<Vec<ChangePoint>>,
    },
    /// Contiguous scenes from an interval detector
    Scenes { intervals: Vec<Interval> },
}

/// Which algorithm produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BoundarySelection,
    SceneMerge,
}

/// The planned segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    pub strategy: Strategy,
    pub segments: Vec<Segment>,
}

impl SegmentPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First start and last end, if any segments exist.
    #[must_use]
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.segments.first()?.start, self.segments.last()?.end))
    }

    #[must_use]
    pub fn manifest(&self) -> SegmentManifest {
        SegmentManifest::from_segments(&self.segments)
    }
}

/// Plans segments from detector change points.
///
/// All sources are merged (using the configured epsilon) before selection.
pub fn plan_from_change_points(
    config: &SegmentationConfig,
    total_duration: f64,
    sources: &[&[ChangePoint]],
) -> CoreResult<SegmentPlan> {
    let selector = BoundarySelector::from_config(config);
    let boundaries = selector.select_from_sources(total_duration, sources)?;
    let segments = boundaries_to_segments(&boundaries);

    let expected_end = boundaries.last().copied().unwrap_or(0.0);
    verify_partition(&segments, 0.0, expected_end)?;

    let candidate_count: usize = sources.iter().map(|source| source.len()).sum();
    info!(
        "Selected {} segment(s) over {:.3}s from {} change point(s) in {} source(s)",
        segments.len(),
        total_duration,
        candidate_count,
        sources.len()
    );

    Ok(SegmentPlan {
        strategy: Strategy::BoundarySelection,
        segments,
    })
}

/// Plans segments by regrouping detected scenes.
pub fn plan_from_scenes(
    config: &SegmentationConfig,
    intervals: &[Interval],
) -> CoreResult<SegmentPlan> {
    let merger = DurationMerger::from_config(config);
    let segments = merger.merge(intervals)?;

    if let (Some(first), Some(last)) = (intervals.first(), intervals.last()) {
        verify_partition(&segments, first.start, last.end)?;
    }

    info!(
        "Merged {} scene(s) into {} segment(s) within {:.3}s-{:.3}s",
        intervals.len(),
        segments.len(),
        merger.min_duration,
        merger.max_duration
    );

    Ok(SegmentPlan {
        strategy: Strategy::SceneMerge,
        segments,
    })
}

/// Plans a single request.
pub fn plan(config: &SegmentationConfig, request: &PlanRequest) -> CoreResult<SegmentPlan> {
    match request {
        PlanRequest::ChangePoints {
            total_duration,
            sources,
        } => {
            let sources: Vec<&[ChangePoint]> = sources.iter().map(Vec::as_slice).collect();
            plan_from_change_points(config, *total_duration, &sources)
        }
        PlanRequest::Scenes { intervals } => plan_from_scenes(config, intervals),
    }
}

/// Plans many independent requests in parallel.
///
/// Results are returned in request order; one failing request does not
/// affect the others.
pub fn plan_batch(
    config: &SegmentationConfig,
    requests: &[PlanRequest],
) -> Vec<CoreResult<SegmentPlan>> {
    debug!("Planning {} request(s) in parallel", requests.len());
    requests
        .par_iter()
        .map(|request| plan(config, request))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn change_point_plan_covers_whole_duration() {
        let config = SegmentationConfig::default();
        let scene: &[f64] = &[115.0];
        let audio: &[f64] = &[115.0, 180.0];
        let plan = plan_from_change_points(&config, 200.0, &[scene, audio]).unwrap();

        assert_eq!(plan.strategy, Strategy::BoundarySelection);
        assert_eq!(
            plan.segments,
            vec![Segment::new(0.0, 115.0), Segment::new(115.0, 200.0)]
        );
        assert_eq!(plan.span(), Some((0.0, 200.0)));
    }

    #[test]
    fn scene_plan_uses_configured_bounds() {
        let config = SegmentationConfig {
            min_duration: 10.0,
            max_duration: 25.0,
            ..Default::default()
        };
        let intervals = vec![
            Interval::new(0.0, 10.0),
            Interval::new(10.0, 20.0),
            Interval::new(20.0, 30.0),
        ];
        let plan = plan_from_scenes(&config, &intervals).unwrap();
        assert_eq!(
            plan.segments,
            vec![Segment::new(0.0, 20.0), Segment::new(20.0, 30.0)]
        );
    }

    #[test]
    fn batch_keeps_order_and_isolates_failures() {
        let config = SegmentationConfig::default();
        let requests = vec![
            PlanRequest::ChangePoints {
                total_duration: 310.0,
                sources: vec![],
            },
            PlanRequest::Scenes {
                intervals: vec![Interval::new(0.0, 10.0), Interval::new(20.0, 30.0)],
            },
            PlanRequest::Scenes {
                intervals: vec![Interval::new(0.0, 10.0)],
            },
        ];

        let results = plan_batch(&config, &requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().len(), 3);
        assert!(matches!(results[1], Err(CoreError::InvalidInterval(_))));
        assert_eq!(
            results[2].as_ref().unwrap().segments,
            vec![Segment::new(0.0, 10.0)]
        );
    }

    #[test]
    fn empty_duration_gives_empty_plan() {
        let plan = plan_from_change_points(&SegmentationConfig::default(), 0.0, &[]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.span(), None);
    }
}
