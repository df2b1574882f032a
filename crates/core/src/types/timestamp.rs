//! Instant-in-time type shared across the display helpers.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Timestamp`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The epoch-millisecond value does not fit in the supported range.
    #[error("epoch milliseconds out of range: {0}")]
    OutOfRange(i64),
    /// The input string is not a valid RFC 3339 timestamp.
    #[error("invalid timestamp string: {0}")]
    Parse(#[from] chrono::ParseError),
}

/// A UTC instant.
///
/// Clients exchange timestamps as epoch milliseconds, so that is the serde
/// wire shape; RFC 3339 strings are accepted via [`FromStr`] for
/// human-entered input.
///
/// ## Examples
///
/// ```
/// use kwatt_core::Timestamp;
///
/// let ts = Timestamp::from_epoch_ms(1_700_000_000_000).unwrap();
/// assert_eq!(ts.epoch_ms(), 1_700_000_000_000);
///
/// let parsed: Timestamp = "2024-05-01T12:00:00Z".parse().unwrap();
/// ```
///
/// [`FromStr`]: std::str::FromStr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(#[serde(with = "chrono::serde::ts_milliseconds")] DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::OutOfRange`] when the value falls outside
    /// the representable date range (roughly ±262,000 years).
    pub fn from_epoch_ms(ms: i64) -> Result<Self, TimestampError> {
        DateTime::from_timestamp_millis(ms)
            .map(Self)
            .ok_or(TimestampError::OutOfRange(ms))
    }

    /// The current instant.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Epoch milliseconds.
    #[must_use]
    pub fn epoch_ms(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The underlying UTC datetime, for formatting.
    #[must_use]
    pub const fn as_utc(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = DateTime::parse_from_rfc3339(s)?;
        Ok(Self(dt.with_timezone(&Utc)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_ms_roundtrip() {
        let ts = Timestamp::from_epoch_ms(1_700_000_000_000).unwrap();
        assert_eq!(ts.epoch_ms(), 1_700_000_000_000);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Timestamp::from_epoch_ms(i64::MAX),
            Err(TimestampError::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_from_str_rfc3339() {
        let ts: Timestamp = "2024-05-01T12:00:00Z".parse().unwrap();
        assert_eq!(ts.epoch_ms(), 1_714_564_800_000);

        let offset: Timestamp = "2024-05-01T13:00:00+01:00".parse().unwrap();
        assert_eq!(offset, ts);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("yesterday".parse::<Timestamp>().is_err());
        assert!("2024-13-01T00:00:00Z".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_serde_as_epoch_ms() {
        let ts = Timestamp::from_epoch_ms(1_700_000_000_000).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1700000000000");
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn test_display_is_rfc3339() {
        let ts = Timestamp::from_epoch_ms(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01T00:00:00+00:00");
    }
}
