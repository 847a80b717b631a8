//! Utility functions for time formatting and parsing.

/// Formats seconds as HH:MM:SS.mmm (e.g., 3725.5 -> "01:02:05.500").
/// Returns "??:??:??.???" for negative or non-finite input.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??.???".to_string();
    }

    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{hours:02}:{minutes:02}:{secs:02}.{millis:03}")
}

/// Parses a timecode to seconds.
///
/// Accepts `SS(.fff)`, `MM:SS(.fff)` and `HH:MM:SS(.fff)`. Returns `None` for
/// anything else, including negative components.
#[must_use]
pub fn parse_timecode(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut seconds = 0.0;
    for part in &parts {
        let value = part.parse::<f64>().ok()?;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        seconds = seconds * 60.0 + value;
    }
    Some(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_milliseconds() {
        assert_eq!(format_timestamp(0.0), "00:00:00.000");
        assert_eq!(format_timestamp(3725.5), "01:02:05.500");
        assert_eq!(format_timestamp(59.9996), "00:01:00.000");
        assert_eq!(format_timestamp(-1.0), "??:??:??.???");
    }

    #[test]
    fn parses_timecodes() {
        assert_eq!(parse_timecode("90"), Some(90.0));
        assert_eq!(parse_timecode("1:30"), Some(90.0));
        assert_eq!(parse_timecode("01:02:05.5"), Some(3725.5));
        assert_eq!(parse_timecode("1:2:3:4"), None);
        assert_eq!(parse_timecode("abc"), None);
        assert_eq!(parse_timecode("-1:00"), None);
    }
}
