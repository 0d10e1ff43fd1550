// ============================================================================
// Clock Durations
// Second-granularity time values with two display units
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display unit for a clock duration.
///
/// The canonical value is always whole seconds; the unit drives formatting.
/// `HourMin` values are minute-granular (seconds are always `:00`-aligned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockUnit {
    /// `"M:SS"` - minutes and seconds
    MinSec,
    /// `"H:MM"` - hours and minutes
    HourMin,
}

/// Render total seconds as `"M:SS"` (seconds zero-padded to two digits).
///
/// Minutes are not clamped: 9000 seconds renders as `"150:00"`.
pub fn seconds_to_clock(total_seconds: i64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render total minutes as `"H:MM"` (minutes zero-padded to two digits).
pub fn minutes_to_clock(total_minutes: i64) -> String {
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Render total seconds in the given display unit.
///
/// `HourMin` truncates to whole minutes; callers in that mode only ever
/// produce `:00`-aligned second counts.
pub fn format_seconds(total_seconds: i64, unit: ClockUnit) -> String {
    match unit {
        ClockUnit::MinSec => seconds_to_clock(total_seconds),
        ClockUnit::HourMin => minutes_to_clock(total_seconds / 60),
    }
}

/// Parse a user-submitted clock answer into total seconds.
///
/// Splits on `:` and requires exactly two non-negative numeric parts. The
/// interpretation is driven by the magnitude of the expected answer, not by
/// an explicit format flag: when `expected_seconds > 3600` the parts are read
/// as hours:minutes, otherwise as minutes:seconds. An `"M:SS"` answer that
/// itself exceeds an hour is therefore misread here; the engine keeps an
/// explicit [`ClockUnit`] tag on each answer for formatting, but grading
/// preserves this magnitude rule for compatibility.
///
/// Returns `None` on malformed input; the session layer treats that as an
/// incorrect answer, never an error.
pub fn parse_clock_answer(text: &str, expected_seconds: i64) -> Option<i64> {
    let mut parts = text.trim().split(':');
    let first: i64 = parts.next()?.trim().parse().ok()?;
    let second: i64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || first < 0 || second < 0 {
        return None;
    }

    if expected_seconds > 3600 {
        Some(first * 3600 + second * 60)
    } else {
        Some(first * 60 + second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_to_clock() {
        assert_eq!(seconds_to_clock(150), "2:30");
        assert_eq!(seconds_to_clock(0), "0:00");
        assert_eq!(seconds_to_clock(61), "1:01");
        assert_eq!(seconds_to_clock(9000), "150:00");
    }

    #[test]
    fn test_minutes_to_clock() {
        assert_eq!(minutes_to_clock(75), "1:15");
        assert_eq!(minutes_to_clock(60), "1:00");
        assert_eq!(minutes_to_clock(59), "0:59");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(150, ClockUnit::MinSec), "2:30");
        assert_eq!(format_seconds(4500, ClockUnit::HourMin), "1:15");
    }

    #[test]
    fn test_parse_min_sec() {
        // Expected answer at or below an hour reads as minutes:seconds
        assert_eq!(parse_clock_answer("2:30", 150), Some(150));
        assert_eq!(parse_clock_answer(" 0:05 ", 5), Some(5));
        assert_eq!(parse_clock_answer("2:30", 3600), Some(150));
    }

    #[test]
    fn test_parse_hour_min() {
        // Expected answer above an hour reads as hours:minutes
        assert_eq!(parse_clock_answer("1:15", 4500), Some(4500));
        assert_eq!(parse_clock_answer("2:00", 7200), Some(7200));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_clock_answer("abc", 150), None);
        assert_eq!(parse_clock_answer("2", 150), None);
        assert_eq!(parse_clock_answer("1:2:3", 150), None);
        assert_eq!(parse_clock_answer("-1:30", 150), None);
        assert_eq!(parse_clock_answer("", 150), None);
    }
}
