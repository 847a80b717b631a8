//! Core library for planning micro-episode segments.
//!
//! Turns the output of external change detectors into a contiguous list of
//! segments for an exporter. Two independent algorithms are provided:
//!
//! * [`boundaries`] selects cut points near a target length from point events
//!   (visual cuts, audio onsets), snapping to a nearby change point when one
//!   exists.
//! * [`merger`] regroups contiguous scene intervals into segments whose
//!   duration falls within a `[min, max]` range.
//!
//! Everything here is pure computation on in-memory values; decoding,
//! detection, encoding and upload are left to the caller.
//!
//! ## Usage Example
//!
//! ```rust
//! use microcut_core::{SegmentationConfig, plan_from_change_points};
//!
//! let config = SegmentationConfig::default();
//! let scene_cuts: &[f64] = &[115.0, 250.0];
//! let audio_onsets: &[f64] = &[118.0];
//!
//! let plan = plan_from_change_points(&config, 300.0, &[scene_cuts, audio_onsets]).unwrap();
//! assert_eq!(plan.segments.len(), 3);
//! assert_eq!(plan.segments[0].end, 118.0);
//! ```

pub mod boundaries;
pub mod config;
pub mod error;
pub mod file_logging;
pub mod manifest;
pub mod merger;
pub mod planner;
pub mod sources;
pub mod types;
pub mod utils;
pub mod validation;

// Re-exports for public API
pub use boundaries::{BoundarySelector, merge_change_points, select_boundaries};
pub use config::{RemainderPolicy, SegmentationConfig, SegmentationConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use manifest::{MANIFEST_FILE_NAME, ManifestEntry, SegmentManifest, SegmentStatus};
pub use merger::{DurationMerger, merge_intervals};
pub use planner::{
    PlanRequest, SegmentPlan, Strategy, plan, plan_batch, plan_from_change_points,
    plan_from_scenes,
};
pub use sources::{parse_change_points, parse_intervals};
pub use types::{ChangePoint, Interval, Segment};
pub use utils::{format_timestamp, parse_timecode};
