//! English rendering of durations ("1 hour 40 minutes").

use chrono::Duration;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_WEEK: i64 = 7 * MINUTES_PER_DAY;

/// Render `duration` as words at minute granularity.
///
/// Units are weeks, days, hours and minutes; zero units are left out and
/// seconds are dropped.  The sign is ignored.
///
/// ```
/// use chrono::Duration;
/// use wk_progress::duration_in_words;
///
/// assert_eq!(duration_in_words(Duration::minutes(100)), "1 hour 40 minutes");
/// assert_eq!(duration_in_words(Duration::hours(103)), "4 days 7 hours");
/// assert_eq!(duration_in_words(Duration::seconds(59)), "less than a minute");
/// ```
pub fn duration_in_words(duration: Duration) -> String {
    let mut minutes = duration.num_minutes().abs();
    if minutes == 0 {
        return "less than a minute".to_string();
    }

    let mut parts = Vec::with_capacity(4);
    for (size, unit) in [
        (MINUTES_PER_WEEK, "week"),
        (MINUTES_PER_DAY, "day"),
        (MINUTES_PER_HOUR, "hour"),
        (1, "minute"),
    ] {
        let count = minutes / size;
        minutes %= size;
        match count {
            0 => {}
            1 => parts.push(format!("1 {unit}")),
            n => parts.push(format!("{n} {unit}s")),
        }
    }
    parts.join(" ")
}
