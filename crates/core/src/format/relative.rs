//! Coarse "time ago" strings for listing and message ages.

use crate::types::Timestamp;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
// Calendar-agnostic 30-day bucket, not a true calendar month.
const MONTH_MS: i64 = 30 * DAY_MS;

/// Render a past instant as a coarse age relative to the current time.
///
/// See [`format_relative_time_at`] for the bucket rules.
#[must_use]
pub fn format_relative_time(ts: Timestamp) -> String {
    format_relative_time_at(ts, Timestamp::now())
}

/// Render a past instant as a coarse age relative to `now`.
///
/// Buckets are checked largest-first and floor the elapsed duration:
/// months (30-day), weeks, days, hours, then minutes. Anything under a
/// minute, including future instants, renders `"Just now"`.
///
/// Output is English-only regardless of UI locale; these strings feed the
/// activity feed, which is not localized.
///
/// ```
/// use kwatt_core::{Timestamp, format_relative_time_at};
///
/// let now = Timestamp::from_epoch_ms(1_700_000_000_000).unwrap();
/// let earlier = Timestamp::from_epoch_ms(1_700_000_000_000 - 5 * 60 * 1000).unwrap();
/// assert_eq!(format_relative_time_at(earlier, now), "5 mins ago");
/// ```
#[must_use]
pub fn format_relative_time_at(ts: Timestamp, now: Timestamp) -> String {
    let elapsed = now.epoch_ms().saturating_sub(ts.epoch_ms());

    if elapsed >= MONTH_MS {
        ago(elapsed / MONTH_MS, "month", "months")
    } else if elapsed >= WEEK_MS {
        ago(elapsed / WEEK_MS, "week", "weeks")
    } else if elapsed >= DAY_MS {
        ago(elapsed / DAY_MS, "day", "days")
    } else if elapsed >= HOUR_MS {
        ago(elapsed / HOUR_MS, "hour", "hours")
    } else if elapsed >= MINUTE_MS {
        ago(elapsed / MINUTE_MS, "min", "mins")
    } else {
        "Just now".to_owned()
    }
}

fn ago(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular} ago")
    } else {
        format!("{count} {plural} ago")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_700_000_000_000;

    fn at(elapsed_ms: i64) -> String {
        let now = Timestamp::from_epoch_ms(NOW_MS).unwrap();
        let ts = Timestamp::from_epoch_ms(NOW_MS - elapsed_ms).unwrap();
        format_relative_time_at(ts, now)
    }

    #[test]
    fn test_just_now_under_a_minute() {
        assert_eq!(at(0), "Just now");
        assert_eq!(at(10_000), "Just now");
        assert_eq!(at(MINUTE_MS - 1), "Just now");
    }

    #[test]
    fn test_future_instants_render_just_now() {
        assert_eq!(at(-5 * MINUTE_MS), "Just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(at(MINUTE_MS), "1 min ago");
        assert_eq!(at(5 * MINUTE_MS), "5 mins ago");
        assert_eq!(at(59 * MINUTE_MS + 59_000), "59 mins ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(at(HOUR_MS), "1 hour ago");
        assert_eq!(at(2 * HOUR_MS), "2 hours ago");
        // Floors: 23h59m is still 23 hours.
        assert_eq!(at(DAY_MS - MINUTE_MS), "23 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(at(DAY_MS), "1 day ago");
        assert_eq!(at(3 * DAY_MS), "3 days ago");
        assert_eq!(at(6 * DAY_MS + 23 * HOUR_MS), "6 days ago");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(at(WEEK_MS), "1 week ago");
        assert_eq!(at(2 * WEEK_MS), "2 weeks ago");
        assert_eq!(at(4 * WEEK_MS), "4 weeks ago");
    }

    #[test]
    fn test_months_win_ties_over_weeks() {
        assert_eq!(at(MONTH_MS), "1 month ago");
        assert_eq!(at(2 * MONTH_MS + WEEK_MS), "2 months ago");
        assert_eq!(at(12 * MONTH_MS), "12 months ago");
    }
}
