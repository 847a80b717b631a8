//! Boundary selection from detector change points.
//!
//! Walks the video from time zero in steps of the target duration. Each step
//! snaps to the nearest real change point when one lies within the snapping
//! tolerance, and otherwise cuts at the fixed target. With no change points at
//! all this degrades to fixed-length segmentation.

use log::{debug, warn};

use crate::config::{
    validate_target, SegmentationConfig, DEFAULT_CHANGE_POINT_EPSILON,
    DEFAULT_SNAP_TOLERANCE_RATIO, MAX_SEGMENTS,
};
use crate::error::{CoreError, CoreResult};
use crate::types::{ChangePoint, Segment};

/// Selects segment boundaries near a target length.
///
/// # Examples
///
/// ```rust
/// use microcut_core::boundaries::BoundarySelector;
///
/// let selector = BoundarySelector::new(120.0);
/// let boundaries = selector.select(200.0, &[115.0]).unwrap();
/// assert_eq!(boundaries, vec![115.0, 200.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySelector {
    /// Desired segment length in seconds
    pub target_duration: f64,
    /// Snapping tolerance as a fraction of `target_duration`
    pub snap_tolerance_ratio: f64,
    /// Distance at or below which change points collapse into one
    pub change_point_epsilon: f64,
    /// Clip the final boundary to the total duration
    pub clip_to_duration: bool,
}

impl BoundarySelector {
    /// Creates a selector with the default tolerance, exact deduplication and
    /// final-boundary clipping.
    #[must_use]
    pub fn new(target_duration: f64) -> Self {
        Self {
            target_duration,
            snap_tolerance_ratio: DEFAULT_SNAP_TOLERANCE_RATIO,
            change_point_epsilon: DEFAULT_CHANGE_POINT_EPSILON,
            clip_to_duration: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self {
            target_duration: config.target_duration,
            snap_tolerance_ratio: config.snap_tolerance_ratio,
            change_point_epsilon: config.change_point_epsilon,
            clip_to_duration: config.clip_to_duration,
        }
    }

    /// Maximum distance in seconds between a target boundary and a change
    /// point that is still snapped to.
    #[must_use]
    pub fn snap_tolerance(&self) -> f64 {
        self.target_duration * self.snap_tolerance_ratio
    }

    /// Returns strictly increasing boundary timestamps covering
    /// `(0, total_duration]`.
    ///
    /// Change points outside `(0, total_duration)` and non-finite values are
    /// ignored. A non-positive `total_duration` yields no boundaries.
    pub fn select(
        &self,
        total_duration: f64,
        change_points: &[ChangePoint],
    ) -> CoreResult<Vec<f64>> {
        self.validate()?;

        if total_duration.is_nan() || total_duration <= 0.0 {
            debug!("Total duration {total_duration} is not positive, no boundaries selected");
            return Ok(Vec::new());
        }
        if total_duration.is_infinite() {
            return Err(CoreError::InvalidConstraint(
                "total duration must be finite".to_string(),
            ));
        }

        let mut candidates = merge_change_points(&[change_points], self.change_point_epsilon);
        let before = candidates.len();
        candidates.retain(|&t| t > 0.0 && t < total_duration);
        if candidates.len() < before {
            warn!(
                "Ignoring {} change point(s) outside (0, {:.3})",
                before - candidates.len(),
                total_duration
            );
        }

        let estimated = (total_duration / self.target_duration).ceil();
        if estimated > MAX_SEGMENTS as f64 {
            return Err(CoreError::InvalidConstraint(format!(
                "{total_duration}s at a target of {}s needs about {estimated} segments, more than {MAX_SEGMENTS}",
                self.target_duration
            )));
        }

        let tolerance = self.snap_tolerance();
        let mut boundaries = Vec::with_capacity(estimated as usize);
        let mut current = 0.0;
        let mut first_ahead = 0;

        while current < total_duration {
            let target_end = current + self.target_duration;
            if target_end <= current {
                return Err(CoreError::InvalidConstraint(format!(
                    "target duration {} is too small to advance past {current}",
                    self.target_duration
                )));
            }

            first_ahead += candidates[first_ahead..].partition_point(|&t| t <= current);

            let boundary = match nearest_candidate(&candidates[first_ahead..], target_end) {
                Some(candidate) if (candidate - target_end).abs() <= tolerance => {
                    debug!("Snapped boundary {target_end:.3} to change point {candidate:.3}");
                    candidate
                }
                Some(candidate) => {
                    debug!(
                        "Nearest change point {candidate:.3} is beyond {tolerance:.3}s of {target_end:.3}, using target"
                    );
                    target_end
                }
                None => target_end,
            };

            boundaries.push(boundary);
            current = boundary;
        }

        if self.clip_to_duration {
            if let Some(last) = boundaries.last_mut() {
                if *last > total_duration {
                    debug!("Clipping final boundary {:.3} to {:.3}", *last, total_duration);
                    *last = total_duration;
                }
            }
        }

        Ok(boundaries)
    }

    /// Merges the outputs of several detectors and selects boundaries from
    /// their union.
    pub fn select_from_sources(
        &self,
        total_duration: f64,
        sources: &[&[ChangePoint]],
    ) -> CoreResult<Vec<f64>> {
        let merged = merge_change_points(sources, self.change_point_epsilon);
        self.select(total_duration, &merged)
    }

    fn validate(&self) -> CoreResult<()> {
        validate_target(self.target_duration)?;
        if !self.snap_tolerance_ratio.is_finite() || self.snap_tolerance_ratio < 0.0 {
            return Err(CoreError::InvalidConstraint(format!(
                "snap tolerance ratio must be a non-negative number, got {}",
                self.snap_tolerance_ratio
            )));
        }
        if !self.change_point_epsilon.is_finite() || self.change_point_epsilon < 0.0 {
            return Err(CoreError::InvalidConstraint(format!(
                "change point epsilon must be a non-negative number, got {}",
                self.change_point_epsilon
            )));
        }
        Ok(())
    }
}

/// Selects boundaries with the default snapping tolerance.
///
/// See [`BoundarySelector::select`].
pub fn select_boundaries(
    total_duration: f64,
    target_duration: f64,
    change_points: &[ChangePoint],
) -> CoreResult<Vec<f64>> {
    BoundarySelector::new(target_duration).select(total_duration, change_points)
}

/// Combines change points from several detectors into one sorted list.
///
/// Non-finite and negative values are dropped. Neighbours whose distance is
/// at most `epsilon` collapse into the earlier one; with `epsilon == 0.0`
/// only exact duplicates collapse.
#[must_use]
pub fn merge_change_points(sources: &[&[ChangePoint]], epsilon: f64) -> Vec<ChangePoint> {
    let mut points: Vec<ChangePoint> = sources
        .iter()
        .flat_map(|source| source.iter().copied())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .collect();

    points.sort_by(f64::total_cmp);
    points.dedup_by(|later, kept| *later - *kept <= epsilon);
    points
}

/// Turns boundaries into contiguous segments `(0, b0), (b0, b1), ...`.
#[must_use]
pub fn boundaries_to_segments(boundaries: &[f64]) -> Vec<Segment> {
    let mut start = 0.0;
    boundaries
        .iter()
        .map(|&end| {
            let segment = Segment::new(start, end);
            start = end;
            segment
        })
        .collect()
}

/// Nearest value to `target` in a sorted slice; ties go to the earlier value.
fn nearest_candidate(candidates: &[f64], target: f64) -> Option<f64> {
    let split = candidates.partition_point(|&t| t < target);
    let below = split.checked_sub(1).map(|i| candidates[i]);
    let above = candidates.get(split).copied();

    match (below, above) {
        (Some(below), Some(above)) => {
            if above - target < target - below {
                Some(above)
            } else {
                Some(below)
            }
        }
        (below, above) => below.or(above),
    }
}
