//! Configuration structures and constants for the microcut-core library.
//!
//! The planner never reads environment variables or files itself. Callers
//! (such as microcut-cli) resolve settings from wherever they like and pass a
//! [`SegmentationConfig`] in at call time.

mod builder;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use builder::SegmentationConfigBuilder;

// Default constants

/// Default target length of a segment produced by boundary selection (seconds).
pub const DEFAULT_TARGET_DURATION: f64 = 120.0;

/// Default lower bound for merged scene groups (seconds).
pub const DEFAULT_MIN_DURATION: f64 = 45.0;

/// Default upper bound for merged scene groups (seconds).
pub const DEFAULT_MAX_DURATION: f64 = 90.0;

/// Fraction of the target duration a change point may lie away from the
/// target boundary and still be snapped to.
pub const DEFAULT_SNAP_TOLERANCE_RATIO: f64 = 0.2;

/// Change points closer than or equal to this many seconds collapse into one.
/// Zero means exact equality only.
pub const DEFAULT_CHANGE_POINT_EPSILON: f64 = 0.0;

/// Maximum gap (seconds) tolerated between adjacent input intervals before
/// they are rejected as non-contiguous.
pub const CONTIGUITY_TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of segments a single boundary selection may
/// produce, estimated as `ceil(total_duration / target_duration)`.
pub const MAX_SEGMENTS: usize = 1_000_000;

/// What to do with a final scene group that is shorter than the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemainderPolicy {
    /// Extend the previously emitted segment to absorb the remainder. The
    /// extended segment may exceed the maximum duration.
    #[default]
    MergeBackward,

    /// Emit the remainder as its own (under-length) segment.
    KeepShort,
}

/// Settings for both planning algorithms.
///
/// Boundary selection uses `target_duration`, `snap_tolerance_ratio`,
/// `change_point_epsilon` and `clip_to_duration`. Scene merging uses
/// `min_duration`, `max_duration` and `remainder_policy`.
///
/// # Examples
///
/// ```rust
/// use microcut_core::config::SegmentationConfigBuilder;
///
/// let config = SegmentationConfigBuilder::new()
///     .target_duration(90.0)
///     .min_duration(30.0)
///     .max_duration(60.0)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Desired segment length for boundary selection, in seconds
    pub target_duration: f64,

    /// Minimum length of a merged scene group, in seconds
    pub min_duration: f64,

    /// Maximum length of a merged scene group, in seconds
    pub max_duration: f64,

    /// Snapping tolerance as a fraction of `target_duration`
    pub snap_tolerance_ratio: f64,

    /// Distance at or below which change points are treated as duplicates
    pub change_point_epsilon: f64,

    /// Clip the final boundary to the total duration
    pub clip_to_duration: bool,

    /// Handling of a short trailing scene group
    pub remainder_policy: RemainderPolicy,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            target_duration: DEFAULT_TARGET_DURATION,
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            snap_tolerance_ratio: DEFAULT_SNAP_TOLERANCE_RATIO,
            change_point_epsilon: DEFAULT_CHANGE_POINT_EPSILON,
            clip_to_duration: true,
            remainder_policy: RemainderPolicy::default(),
        }
    }
}

impl SegmentationConfig {
    /// Checks every field used by either algorithm.
    pub fn validate(&self) -> CoreResult<()> {
        validate_target(self.target_duration)?;
        validate_bounds(self.min_duration, self.max_duration)?;
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

/// Rejects a non-positive or non-finite target duration.
pub(crate) fn validate_target(target_duration: f64) -> CoreResult<()> {
    if target_duration.is_finite() && target_duration > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConstraint(format!(
            "target duration must be positive, got {target_duration}"
        )))
    }
}

/// Rejects non-positive bounds and `min >= max`.
pub(crate) fn validate_bounds(min_duration: f64, max_duration: f64) -> CoreResult<()> {
    if !(min_duration.is_finite() && min_duration > 0.0) {
        return Err(CoreError::InvalidConstraint(format!(
            "minimum duration must be positive, got {min_duration}"
        )));
    }
    if !(max_duration.is_finite() && max_duration > 0.0) {
        return Err(CoreError::InvalidConstraint(format!(
            "maximum duration must be positive, got {max_duration}"
        )));
    }
    if min_duration >= max_duration {
        return Err(CoreError::InvalidConstraint(format!(
            "minimum duration ({min_duration}) must be below maximum duration ({max_duration})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SegmentationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_duration, 120.0);
        assert_eq!(config.min_duration, 45.0);
        assert_eq!(config.max_duration, 90.0);
        assert_eq!(config.remainder_policy, RemainderPolicy::MergeBackward);
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = SegmentationConfig {
            min_duration: 90.0,
            max_duration: 45.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConstraint(_))));
    }

    #[test]
    fn rejects_zero_target() {
        assert!(validate_target(0.0).is_err());
        assert!(validate_target(f64::INFINITY).is_err());
    }

    #[test]
    fn deserializes_partial_json_with_defaults() {
        let config: SegmentationConfig =
            serde_json::from_str(r#"{"target_duration": 60.0, "remainder_policy": "keep-short"}"#)
                .unwrap();
        assert_eq!(config.target_duration, 60.0);
        assert_eq!(config.min_duration, DEFAULT_MIN_DURATION);
        assert_eq!(config.remainder_policy, RemainderPolicy::KeepShort);
    }
}
