//! Parsing of detector output.
//!
//! Detectors run outside this crate and hand over their results as text.
//! Two layouts are understood for each kind of input:
//!
//! * change points: numbers separated by whitespace, commas or semicolons
//!   (`#` starts a comment), or a JSON array of numbers;
//! * intervals: one `start,end` pair per line, or a JSON array of
//!   `[start, end]` pairs or `{"start": .., "end": ..}` objects. A segment
//!   manifest is accepted too, so a previous plan can be fed back in.
//!
//! Plain-text values may be written as timecodes (`MM:SS`, `HH:MM:SS.fff`).

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::manifest::SegmentManifest;
use crate::types::{ChangePoint, Interval};
use crate::utils::parse_timecode;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInterval {
    Pair(f64, f64),
    Object { start: f64, end: f64 },
}

impl From<RawInterval> for Interval {
    fn from(raw: RawInterval) -> Self {
        match raw {
            RawInterval::Pair(start, end) | RawInterval::Object { start, end } => {
                Interval::new(start, end)
            }
        }
    }
}

/// Parses change points in either supported layout.
///
/// Values are returned in input order; sorting and deduplication happen in
/// boundary selection.
pub fn parse_change_points(text: &str) -> CoreResult<Vec<ChangePoint>> {
    if looks_like_json(text) {
        return serde_json::from_str::<Vec<f64>>(text).map_err(json_error);
    }

    let mut points = Vec::new();
    for (line_number, line) in content_lines(text) {
        for token in tokens(line) {
            points.push(parse_seconds(token, line_number)?);
        }
    }
    Ok(points)
}

/// Parses scene intervals in either supported layout.
///
/// Only syntax is checked here; see [`crate::merger::validate_intervals`]
/// for ordering and contiguity.
pub fn parse_intervals(text: &str) -> CoreResult<Vec<Interval>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') {
        let manifest = SegmentManifest::from_json(text).map_err(|e| CoreError::Parse {
            line: 1,
            message: format!("expected a segment manifest: {e}"),
        })?;
        return Ok(manifest.to_segments());
    }
    if trimmed.starts_with('[') {
        let raw: Vec<RawInterval> = serde_json::from_str(text).map_err(json_error)?;
        return Ok(raw.into_iter().map(Interval::from).collect());
    }

    let mut intervals = Vec::new();
    for (line_number, line) in content_lines(text) {
        let fields: Vec<&str> = tokens(line).collect();
        let [start, end] = fields.as_slice() else {
            return Err(CoreError::Parse {
                line: line_number,
                message: format!("expected `start,end`, found {} value(s)", fields.len()),
            });
        };
        intervals.push(Interval::new(
            parse_seconds(start, line_number)?,
            parse_seconds(end, line_number)?,
        ));
    }
    Ok(intervals)
}

fn looks_like_json(text: &str) -> bool {
    text.trim_start().starts_with('[')
}

/// Non-empty lines with comments removed, numbered from one.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().filter_map(|(index, line)| {
        let content = line.split('#').next().unwrap_or_default().trim();
        (!content.is_empty()).then_some((index + 1, content))
    })
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn parse_seconds(token: &str, line: usize) -> CoreResult<f64> {
    let parsed = if token.contains(':') {
        parse_timecode(token)
    } else {
        token.parse::<f64>().ok()
    };
    parsed.ok_or_else(|| CoreError::Parse {
        line,
        message: format!("`{token}` is not a time value"),
    })
}

fn json_error(error: serde_json::Error) -> CoreError {
    CoreError::Parse {
        line: error.line(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_points_from_mixed_separators() {
        let text = "# scene cuts\n12.5, 30\n45;60 75\n\n1:30 # a timecode\n";
        assert_eq!(
            parse_change_points(text).unwrap(),
            vec![12.5, 30.0, 45.0, 60.0, 75.0, 90.0]
        );
    }

    #[test]
    fn change_points_from_json() {
        assert_eq!(parse_change_points(" [1.5, 2, 3]").unwrap(), vec![1.5, 2.0, 3.0]);
    }

    #[test]
    fn change_point_error_reports_line() {
        let err = parse_change_points("1\n2\nthree\n").unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 3, .. }));
    }

    #[test]
    fn intervals_from_lines() {
        let text = "0,20\n20 50\n50, 1:00\n";
        assert_eq!(
            parse_intervals(text).unwrap(),
            vec![
                Interval::new(0.0, 20.0),
                Interval::new(20.0, 50.0),
                Interval::new(50.0, 60.0)
            ]
        );
    }

    #[test]
    fn intervals_from_json_pairs_and_objects() {
        let text = r#"[[0, 20], {"start": 20, "end": 50}]"#;
        assert_eq!(
            parse_intervals(text).unwrap(),
            vec![Interval::new(0.0, 20.0), Interval::new(20.0, 50.0)]
        );
    }

    #[test]
    fn intervals_from_manifest() {
        let text = r#"{"segments": [{"segment": 0, "start": 0.0, "end": 60.0, "duration": 60.0}]}"#;
        assert_eq!(parse_intervals(text).unwrap(), vec![Interval::new(0.0, 60.0)]);
    }

    #[test]
    fn interval_line_needs_two_values() {
        let err = parse_intervals("0,20\n20,30,40\n").unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 2, .. }));
    }
}
