//! Time values shared by the planning algorithms.
//!
//! Change points are plain `f64` seconds. Scenes and segments are both
//! represented by [`Interval`]; [`Segment`] is the name used for intervals
//! that leave the planner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate cut, in seconds from the start of the video.
pub type ChangePoint = f64;

/// A half-open time range `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

/// A final output range handed to the exporter.
pub type Segment = Interval;

impl Interval {
    /// Creates an interval without checking its bounds.
    ///
    /// Use [`Interval::checked`] when the values come from outside the crate.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Creates an interval, rejecting non-finite bounds and `start >= end`.
    pub fn checked(start: f64, end: f64) -> crate::CoreResult<Self> {
        let interval = Self { start, end };
        if interval.is_valid() {
            Ok(interval)
        } else {
            Err(crate::CoreError::InvalidInterval(format!(
                "({start}, {end}) must satisfy start < end with finite bounds"
            )))
        }
    }

    /// Length of the interval in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s-{:.3}s", self.start, self.end)
    }
}

/// Sum of the durations of `intervals`.
#[must_use]
pub fn total_duration(intervals: &[Interval]) -> f64 {
    intervals.iter().map(Interval::duration).sum()
}
