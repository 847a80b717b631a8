//! Regrouping of detected scenes into duration-bounded segments.
//!
//! A single left-to-right greedy pass keeps one open group of adjacent
//! scenes. A scene is absorbed while the group stays within the maximum
//! duration. When absorbing would overshoot, a group that already meets the
//! minimum is emitted and a new one starts; a group that does not is forced to
//! take the scene anyway and is emitted oversized. A short group left at the
//! end is folded into the previous segment (or kept, depending on the
//! [`RemainderPolicy`]).
//!
//! This is a best-effort heuristic, not an optimal packing. It never looks
//! back further than the last emitted segment.

use log::{debug, warn};

use crate::config::{validate_bounds, RemainderPolicy, SegmentationConfig, CONTIGUITY_TOLERANCE};
use crate::error::{CoreError, CoreResult};
use crate::types::{Interval, Segment};

/// Merges contiguous scenes into segments within `[min_duration, max_duration]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationMerger {
    pub min_duration: f64,
    pub max_duration: f64,
    pub remainder_policy: RemainderPolicy,
}

/// The open accumulator group.
#[derive(Debug, Clone, Copy)]
struct Group {
    start: f64,
    end: f64,
    duration: f64,
}

impl Group {
    fn open(interval: &Interval) -> Self {
        Self {
            start: interval.start,
            end: interval.end,
            duration: interval.duration(),
        }
    }

    /// Extends `group` (or opens a new one) with `interval`.
    fn absorb(group: Option<Self>, interval: &Interval) -> Self {
        match group {
            Some(group) => Self {
                start: group.start,
                end: interval.end,
                duration: group.duration + interval.duration(),
            },
            None => Self::open(interval),
        }
    }

    fn interval(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

impl DurationMerger {
    /// Creates a merger that folds a short remainder into the previous segment.
    #[must_use]
    pub fn new(min_duration: f64, max_duration: f64) -> Self {
        Self {
            min_duration,
            max_duration,
            remainder_policy: RemainderPolicy::MergeBackward,
        }
    }

    #[must_use]
    pub fn from_config(config: &SegmentationConfig) -> Self {
        Self {
            min_duration: config.min_duration,
            max_duration: config.max_duration,
            remainder_policy: config.remainder_policy,
        }
    }

    #[must_use]
    pub fn with_remainder_policy(mut self, policy: RemainderPolicy) -> Self {
        self.remainder_policy = policy;
        self
    }

    /// Regroups `intervals` into segments covering the same span.
    ///
    /// Returns an empty list for empty input. Fails with
    /// [`CoreError::InvalidConstraint`] for bad bounds and
    /// [`CoreError::InvalidInterval`] for empty, reversed or non-contiguous
    /// intervals.
    pub fn merge(&self, intervals: &[Interval]) -> CoreResult<Vec<Segment>> {
        validate_bounds(self.min_duration, self.max_duration)?;
        validate_intervals(intervals)?;

        let Some((first, rest)) = intervals.split_first() else {
            return Ok(Vec::new());
        };

        let mut merged: Vec<Segment> = Vec::new();
        let mut group = Some(Group::open(first));

        for interval in rest {
            let group_duration = group.map_or(0.0, |g| g.duration);

            if group_duration + interval.duration() <= self.max_duration {
                group = Some(Group::absorb(group, interval));
            } else if group_duration >= self.min_duration {
                if let Some(closed) = group {
                    debug!("Emitting group {} ({:.3}s)", closed.interval(), closed.duration);
                    merged.push(closed.interval());
                }
                group = Some(Group::open(interval));
            } else {
                let forced = Group::absorb(group, interval);
                warn!(
                    "Group {} forced past maximum ({:.3}s > {:.3}s) to reach minimum",
                    forced.interval(),
                    forced.duration,
                    self.max_duration
                );
                merged.push(forced.interval());
                group = None;
            }
        }

        if let Some(remainder) = group {
            if remainder.duration >= self.min_duration || merged.is_empty() {
                merged.push(remainder.interval());
            } else {
                match self.remainder_policy {
                    RemainderPolicy::MergeBackward => {
                        if let Some(last) = merged.last_mut() {
                            debug!(
                                "Folding short remainder {} into previous segment {}",
                                remainder.interval(),
                                last
                            );
                            last.end = remainder.end;
                        }
                    }
                    RemainderPolicy::KeepShort => {
                        warn!(
                            "Keeping short final segment {} ({:.3}s < {:.3}s)",
                            remainder.interval(),
                            remainder.duration,
                            self.min_duration
                        );
                        merged.push(remainder.interval());
                    }
                }
            }
        }

        Ok(merged)
    }
}

/// Merges scenes with the default remainder policy.
///
/// See [`DurationMerger::merge`].
pub fn merge_intervals(
    intervals: &[Interval],
    min_duration: f64,
    max_duration: f64,
) -> CoreResult<Vec<Segment>> {
    DurationMerger::new(min_duration, max_duration).merge(intervals)
}

/// Checks that every interval is well formed and starts where its
/// predecessor ends.
pub fn validate_intervals(intervals: &[Interval]) -> CoreResult<()> {
    if let Some((index, interval)) = intervals.iter().enumerate().find(|(_, i)| !i.is_valid()) {
        return Err(CoreError::InvalidInterval(format!(
            "interval {index} ({}, {}) must satisfy start < end with finite bounds",
            interval.start, interval.end
        )));
    }

    for (index, pair) in intervals.windows(2).enumerate() {
        let (previous, next) = (pair[0], pair[1]);
        if (next.start - previous.end).abs() > CONTIGUITY_TOLERANCE {
            return Err(CoreError::InvalidInterval(format!(
                "interval {} starts at {} but interval {index} ends at {}",
                index + 1,
                next.start,
                previous.end
            )));
        }
    }

    Ok(())
}
