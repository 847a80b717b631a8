//! Segment manifest persisted next to the exported segment files.
//!
//! The JSON shape is consumed by downstream tools and must stay stable:
//!
//! ```json
//! {
//!   "segments": [
//!     { "segment": 0, "start": 0.0, "end": 60.0, "duration": 60.0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::CoreResult;
use crate::types::Segment;

/// Default file name of a manifest inside an output directory.
pub const MANIFEST_FILE_NAME: &str = "timestamps.json";

/// One segment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Zero-based position of the segment
    pub segment: usize,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
}

/// Whether a segment lies inside the requested duration range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStatus {
    Ok,
    Warning,
}

impl fmt::Display for SegmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentStatus::Ok => write!(f, "OK"),
            SegmentStatus::Warning => write!(f, "WARNING"),
        }
    }
}

impl ManifestEntry {
    /// `Ok` when `min_duration <= duration <= max_duration`.
    #[must_use]
    pub fn status(&self, min_duration: f64, max_duration: f64) -> SegmentStatus {
        if (min_duration..=max_duration).contains(&self.duration) {
            SegmentStatus::Ok
        } else {
            SegmentStatus::Warning
        }
    }

    #[must_use]
    pub fn as_segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// Ordered list of segment records under a single `segments` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentManifest {
    pub segments: Vec<ManifestEntry>,
}

impl SegmentManifest {
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        let segments = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| ManifestEntry {
                segment: index,
                start: segment.start,
                end: segment.end,
                duration: segment.duration(),
            })
            .collect();
        Self { segments }
    }

    /// The recorded ranges, in manifest order.
    #[must_use]
    pub fn to_segments(&self) -> Vec<Segment> {
        self.segments.iter().map(ManifestEntry::as_segment).collect()
    }

    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(|entry| entry.duration).sum()
    }

    /// Entries outside `[min_duration, max_duration]`.
    pub fn out_of_range(
        &self,
        min_duration: f64,
        max_duration: f64,
    ) -> impl Iterator<Item = &ManifestEntry> {
        self.segments
            .iter()
            .filter(move |entry| entry.status(min_duration, max_duration) == SegmentStatus::Warning)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the manifest, creating parent directories as needed.
    pub fn write_to_file(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
