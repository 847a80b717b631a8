// microcut-core/tests/test_manifest.rs

use microcut_core::{
    MANIFEST_FILE_NAME, SegmentManifest, SegmentationConfig, SegmentStatus, parse_intervals,
    plan_from_scenes,
};
use microcut_core::types::Interval;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_manifest_written_and_loaded() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("segments").join(MANIFEST_FILE_NAME);

    let intervals = vec![
        Interval::new(0.0, 50.0),
        Interval::new(50.0, 100.0),
        Interval::new(100.0, 110.0),
    ];
    let plan = plan_from_scenes(&SegmentationConfig::default(), &intervals)?;
    let manifest = plan.manifest();
    manifest.write_to_file(&path)?;

    let text = fs::read_to_string(&path)?;
    assert!(text.starts_with("{\n  \"segments\": ["));

    let loaded = SegmentManifest::load(&path)?;
    assert_eq!(loaded, manifest);
    assert_eq!(loaded.to_segments(), plan.segments);
    Ok(())
}

#[test]
fn test_manifest_feeds_back_as_scene_input() -> Result<(), Box<dyn Error>> {
    let manifest = SegmentManifest::from_segments(&[
        Interval::new(0.0, 60.0),
        Interval::new(60.0, 140.0),
    ]);
    let intervals = parse_intervals(&manifest.to_json()?)?;
    assert_eq!(intervals, manifest.to_segments());
    Ok(())
}

#[test]
fn test_status_matches_duration_range() {
    let manifest = SegmentManifest::from_segments(&[
        Interval::new(0.0, 30.0),
        Interval::new(30.0, 100.0),
        Interval::new(100.0, 200.0),
    ]);
    let statuses: Vec<SegmentStatus> = manifest
        .segments
        .iter()
        .map(|entry| entry.status(45.0, 90.0))
        .collect();
    assert_eq!(
        statuses,
        vec![SegmentStatus::Warning, SegmentStatus::Ok, SegmentStatus::Warning]
    );
}

#[test]
fn test_loading_missing_manifest_fails() {
    let dir = tempdir().unwrap();
    assert!(SegmentManifest::load(&dir.path().join("missing.json")).is_err());
}
