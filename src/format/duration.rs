// ABOUTME: Renders elapsed time as a single glanceable token.
// ABOUTME: Uses approximate 30-day months and 365-day years.

use chrono::{DateTime, TimeDelta, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format an elapsed span: `now`, `42s`, `5m`, `23h`, `9d`, `3w`, `11M`, `4y`.
///
/// Each unit is the floor of the elapsed seconds. Negative spans (clock skew)
/// read as `now`.
pub fn pretty_duration(elapsed: TimeDelta) -> String {
    let s = elapsed.num_seconds();
    match s {
        s if s < 1 => "now".to_string(),
        s if s < MINUTE => format!("{}s", s),
        s if s < HOUR => format!("{}m", s / MINUTE),
        s if s < 2 * DAY => format!("{}h", s / HOUR),
        s if s < 2 * WEEK => format!("{}d", s / DAY),
        s if s < 2 * MONTH => format!("{}w", s / WEEK),
        s if s < 2 * YEAR => format!("{}M", s / MONTH),
        s => format!("{}y", s / YEAR),
    }
}

/// Elapsed time between `then` and `now`, formatted.
pub fn since(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    pretty_duration(now - then)
}
