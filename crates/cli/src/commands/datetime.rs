//! Date, time, and relative-age commands.
//!
//! # Usage
//!
//! ```bash
//! kwatt-cli date format 2024-05-01T12:00:00Z --locale en --style medium
//! kwatt-cli time format 1714564800000 --locale fr
//! kwatt-cli age 1714564800000
//! ```
//!
//! Instants are accepted as epoch milliseconds or RFC 3339 strings.

use kwatt_core::{
    DateStyle, Locale, TimeStyle, Timestamp, TimestampError, format_date, format_relative_time,
    format_time,
};
use thiserror::Error;

/// Errors that can occur when formatting instants from the shell.
#[derive(Debug, Error)]
pub enum DateTimeError {
    /// The instant argument is neither epoch milliseconds nor RFC 3339.
    #[error("Invalid instant: {0}")]
    InvalidInstant(#[from] TimestampError),

    /// The style argument is not a known detail level.
    #[error("Invalid style: {0}. Valid styles: short, medium")]
    InvalidStyle(String),
}

/// Format an instant as a locale-appropriate date.
///
/// # Errors
///
/// Returns [`DateTimeError`] when the instant or style does not parse.
#[allow(clippy::print_stdout)]
pub fn date(value: &str, locale: Locale, style: &str) -> Result<(), DateTimeError> {
    let ts = parse_instant(value)?;
    let style = parse_date_style(style)?;
    println!("{}", format_date(ts, locale, style));
    Ok(())
}

/// Format an instant as a locale-appropriate time of day.
///
/// # Errors
///
/// Returns [`DateTimeError`] when the instant or style does not parse.
#[allow(clippy::print_stdout)]
pub fn time(value: &str, locale: Locale, style: &str) -> Result<(), DateTimeError> {
    let ts = parse_instant(value)?;
    let style = parse_time_style(style)?;
    println!("{}", format_time(ts, locale, style));
    Ok(())
}

/// Print how long ago an instant was.
///
/// # Errors
///
/// Returns [`DateTimeError`] when the instant does not parse.
#[allow(clippy::print_stdout)]
pub fn age(value: &str) -> Result<(), DateTimeError> {
    let ts = parse_instant(value)?;
    println!("{}", format_relative_time(ts));
    Ok(())
}

/// Epoch milliseconds take priority; anything non-numeric is tried as
/// RFC 3339.
fn parse_instant(value: &str) -> Result<Timestamp, TimestampError> {
    let value = value.trim();
    if let Ok(ms) = value.parse::<i64>() {
        Timestamp::from_epoch_ms(ms)
    } else {
        value.parse()
    }
}

fn parse_date_style(style: &str) -> Result<DateStyle, DateTimeError> {
    match style.to_lowercase().as_str() {
        "short" => Ok(DateStyle::Short),
        "medium" => Ok(DateStyle::Medium),
        other => Err(DateTimeError::InvalidStyle(other.to_owned())),
    }
}

fn parse_time_style(style: &str) -> Result<TimeStyle, DateTimeError> {
    match style.to_lowercase().as_str() {
        "short" => Ok(TimeStyle::Short),
        "medium" => Ok(TimeStyle::Medium),
        other => Err(DateTimeError::InvalidStyle(other.to_owned())),
    }
}
