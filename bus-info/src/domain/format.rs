//! Human-readable "time until departure" strings.

use chrono::TimeDelta;

/// Units in the order they are emitted, with their size in seconds.
const MAGNITUDES: [(&str, i64); 2] = [("hr", 60 * 60), ("min", 60)];

/// Format a duration as e.g. `"1 hr 5 min"`, or `"Due"` if it is imminent.
///
/// A unit is only emitted when the remaining seconds strictly exceed its
/// size, so exactly one hour is `"60 min"` and exactly one minute is `"Due"`.
/// Sub-second precision is truncated toward zero; negative durations are
/// `"Due"`.
///
/// # Examples
///
/// ```
/// use bus_info::domain::format_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(format_duration(TimeDelta::seconds(30)), "Due");
/// assert_eq!(format_duration(TimeDelta::minutes(3)), "3 min");
/// assert_eq!(format_duration(TimeDelta::minutes(90)), "1 hr 30 min");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let mut seconds = duration.num_seconds();
    let mut parts = Vec::with_capacity(MAGNITUDES.len());

    for (name, size) in MAGNITUDES {
        if seconds > size {
            parts.push(format!("{} {name}", seconds / size));
            seconds %= size;
        }
    }

    if parts.is_empty() {
        return "Due".to_string();
    }

    parts.join(" ")
}
