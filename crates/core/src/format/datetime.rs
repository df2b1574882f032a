//! Locale-aware date and time rendering.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::types::{Locale, Timestamp};

/// How much detail a formatted date carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Numeric: `01/05/2024` (fr) / `05/01/2024` (en).
    #[default]
    Short,
    /// With month name: `1 mai 2024` (fr) / `May 1, 2024` (en).
    Medium,
}

/// How much detail a formatted time carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    /// Minutes: `14:30` (fr) / `2:30 PM` (en).
    #[default]
    Short,
    /// With seconds: `14:30:05` (fr) / `2:30:05 PM` (en).
    Medium,
}

/// French month names, chrono only ships English.
const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Render a date in the locale's convention.
///
/// French dates are day-first, English dates month-first:
///
/// ```
/// use kwatt_core::{DateStyle, Locale, Timestamp, format_date};
///
/// let ts: Timestamp = "2024-05-01T12:00:00Z".parse().unwrap();
/// assert_eq!(format_date(ts, Locale::Fr, DateStyle::Short), "01/05/2024");
/// assert_eq!(format_date(ts, Locale::En, DateStyle::Medium), "May 1, 2024");
/// ```
#[must_use]
pub fn format_date(ts: Timestamp, locale: Locale, style: DateStyle) -> String {
    let dt = ts.as_utc();
    match (locale, style) {
        (Locale::Fr, DateStyle::Short) => dt.format("%d/%m/%Y").to_string(),
        (Locale::Fr, DateStyle::Medium) => {
            let month = FRENCH_MONTHS
                .get(dt.month0() as usize)
                .unwrap_or(&"janvier");
            format!("{} {month} {}", dt.day(), dt.year())
        }
        (Locale::En, DateStyle::Short) => dt.format("%m/%d/%Y").to_string(),
        (Locale::En, DateStyle::Medium) => dt.format("%b %-d, %Y").to_string(),
    }
}

/// Render a time of day in the locale's convention.
///
/// French clocks are 24-hour, English 12-hour with an AM/PM marker.
#[must_use]
pub fn format_time(ts: Timestamp, locale: Locale, style: TimeStyle) -> String {
    let dt = ts.as_utc();
    let pattern = match (locale, style) {
        (Locale::Fr, TimeStyle::Short) => "%H:%M",
        (Locale::Fr, TimeStyle::Medium) => "%H:%M:%S",
        (Locale::En, TimeStyle::Short) => "%-I:%M %p",
        (Locale::En, TimeStyle::Medium) => "%-I:%M:%S %p",
    };
    dt.format(pattern).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn may_first() -> Timestamp {
        "2024-05-01T14:30:05Z".parse().unwrap()
    }

    #[test]
    fn test_short_dates() {
        assert_eq!(format_date(may_first(), Locale::Fr, DateStyle::Short), "01/05/2024");
        assert_eq!(format_date(may_first(), Locale::En, DateStyle::Short), "05/01/2024");
    }

    #[test]
    fn test_medium_dates() {
        assert_eq!(format_date(may_first(), Locale::Fr, DateStyle::Medium), "1 mai 2024");
        assert_eq!(format_date(may_first(), Locale::En, DateStyle::Medium), "May 1, 2024");
    }

    #[test]
    fn test_french_month_names() {
        let august: Timestamp = "2023-08-15T00:00:00Z".parse().unwrap();
        assert_eq!(
            format_date(august, Locale::Fr, DateStyle::Medium),
            "15 août 2023"
        );
        let december: Timestamp = "2023-12-31T00:00:00Z".parse().unwrap();
        assert_eq!(
            format_date(december, Locale::Fr, DateStyle::Medium),
            "31 décembre 2023"
        );
    }

    #[test]
    fn test_short_times() {
        assert_eq!(format_time(may_first(), Locale::Fr, TimeStyle::Short), "14:30");
        assert_eq!(format_time(may_first(), Locale::En, TimeStyle::Short), "2:30 PM");
    }

    #[test]
    fn test_medium_times() {
        assert_eq!(format_time(may_first(), Locale::Fr, TimeStyle::Medium), "14:30:05");
        assert_eq!(
            format_time(may_first(), Locale::En, TimeStyle::Medium),
            "2:30:05 PM"
        );
    }

    #[test]
    fn test_morning_and_midnight_in_english() {
        let morning: Timestamp = "2024-05-01T09:05:00Z".parse().unwrap();
        assert_eq!(format_time(morning, Locale::En, TimeStyle::Short), "9:05 AM");
        let midnight: Timestamp = "2024-05-01T00:00:00Z".parse().unwrap();
        assert_eq!(format_time(midnight, Locale::En, TimeStyle::Short), "12:00 AM");
    }
}
