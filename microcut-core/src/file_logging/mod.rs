//! File logging for planning runs.
//!
//! `setup` installs a log4rs file appender; the helpers here write a plan to
//! whichever logger is installed, so a log file records every segment that was
//! handed to the exporter.

pub mod setup;

pub use setup::setup_file_logging;

use log::{info, warn};

use crate::manifest::SegmentStatus;
use crate::planner::{SegmentPlan, Strategy};

/// Logs every segment of `plan` together with its status against
/// `[min_duration, max_duration]`.
pub fn log_plan(plan: &SegmentPlan, min_duration: f64, max_duration: f64) {
    let strategy = match plan.strategy {
        Strategy::BoundarySelection => "boundary selection",
        Strategy::SceneMerge => "scene merge",
    };
    info!("Plan ({}): {} segment(s)", strategy, plan.len());

    for entry in &plan.manifest().segments {
        match entry.status(min_duration, max_duration) {
            SegmentStatus::Ok => info!(
                "  Segment {}: {:.3}s-{:.3}s ({:.1}s, OK)",
                entry.segment, entry.start, entry.end, entry.duration
            ),
            SegmentStatus::Warning => warn!(
                "  Segment {}: {:.3}s-{:.3}s ({:.1}s, WARNING)",
                entry.segment, entry.start, entry.end, entry.duration
            ),
        }
    }
}
