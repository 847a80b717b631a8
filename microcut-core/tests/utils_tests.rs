// microcut-core/tests/utils_tests.rs

use microcut_core::{format_timestamp, parse_timecode};

#[test]
fn test_format_timestamp() {
    assert_eq!(format_timestamp(0.0), "00:00:00.000");
    assert_eq!(format_timestamp(0.25), "00:00:00.250");
    assert_eq!(format_timestamp(61.0), "00:01:01.000");
    assert_eq!(format_timestamp(3600.0), "01:00:00.000");
    assert_eq!(format_timestamp(f64::NAN), "??:??:??.???");
}

#[test]
fn test_timecode_round_trip_through_formatting() {
    for seconds in [0.0, 12.5, 599.125, 7322.75] {
        assert_eq!(parse_timecode(&format_timestamp(seconds)), Some(seconds));
    }
}
