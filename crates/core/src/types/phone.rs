//! Cameroonian phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty after stripping spaces and dashes.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character that is not a digit, space, or dash.
    #[error("phone number contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    /// The subscriber number is not exactly 9 digits.
    #[error("phone number must have 9 digits after the country code, got {0}")]
    WrongLength(usize),
    /// The subscriber number starts with a digit outside {6, 2, 3}.
    #[error("phone number must start with 6, 2, or 3, got {0}")]
    InvalidLeadingDigit(char),
    /// The input starts with `+` but not the Cameroon country code.
    #[error("international numbers must use the +237 country code")]
    WrongCountryCode,
}

/// A Cameroonian phone number.
///
/// Cameroon numbers are 9 significant digits, optionally prefixed by the
/// country code `237`. Mobile numbers start with 6, fixed lines with 2 or 3.
/// The canonical form stored here is the 9 subscriber digits; the country
/// code and spacing are display concerns.
///
/// ## Examples
///
/// ```
/// use kwatt_core::PhoneNumber;
///
/// let phone = PhoneNumber::parse("+237 612 345 678").unwrap();
/// assert_eq!(phone.as_str(), "612345678");
/// assert_eq!(phone.display_international(), "+237 612 345 678");
///
/// assert!(PhoneNumber::parse("12345").is_err());      // too short
/// assert!(PhoneNumber::parse("412345678").is_err());  // bad leading digit
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of significant digits in a Cameroonian number.
    pub const SUBSCRIBER_DIGITS: usize = 9;

    /// Parse a `PhoneNumber` from user input.
    ///
    /// Spaces and dashes are stripped, and an optional `+237` or `237`
    /// country prefix is removed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Contains characters other than digits, spaces, dashes, or a
    ///   leading `+`
    /// - Does not have exactly 9 digits after the country code
    /// - Starts with a digit other than 6, 2, or 3
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let trimmed = input.trim();
        let has_plus = trimmed.starts_with('+');
        let cleaned = strip_separators(trimmed)?;
        if cleaned.is_empty() {
            return Err(PhoneError::Empty);
        }

        // An explicit "+" commits the input to international form.
        let digits = if has_plus {
            cleaned
                .strip_prefix("237")
                .ok_or(PhoneError::WrongCountryCode)?
        } else {
            strip_country_code(&cleaned)
        };
        let count = digits.chars().count();
        if count != Self::SUBSCRIBER_DIGITS {
            return Err(PhoneError::WrongLength(count));
        }

        match digits.chars().next() {
            Some('6' | '2' | '3') => Ok(Self(digits.to_owned())),
            Some(other) => Err(PhoneError::InvalidLeadingDigit(other)),
            None => Err(PhoneError::Empty),
        }
    }

    /// Returns the 9 canonical subscriber digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `PhoneNumber` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Format with country code: `+237 XXX XXX XXX`.
    #[must_use]
    pub fn display_international(&self) -> String {
        format!("+237 {}", group_in_threes(&self.0))
    }

    /// Format without country code: `XXX XXX XXX`.
    #[must_use]
    pub fn display_local(&self) -> String {
        group_in_threes(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_international())
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if the input parses as a Cameroonian phone number.
#[must_use]
pub fn is_valid_cameroon_phone(input: &str) -> bool {
    PhoneNumber::parse(input).is_ok()
}

/// Best-effort display formatting for raw phone input.
///
/// Spaces and dashes are stripped; a `+237`/`237` prefix re-renders as
/// `+237 XXX XXX XXX`, anything else as the remaining characters grouped in
/// threes. This never fails: a non-Cameroonian number comes back as a
/// grouped string, not an error. Use [`is_valid_cameroon_phone`] to gate on
/// validity.
#[must_use]
pub fn format_phone_number(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| *c != ' ' && *c != '-').collect();

    if let Some(rest) = cleaned.strip_prefix("+237") {
        return format!("+237 {}", group_in_threes(rest));
    }
    match cleaned.strip_prefix("237") {
        // A bare 237 prefix is only a country code when a full subscriber
        // number follows; "237123456" is itself a 9-digit fixed line.
        Some(rest) if rest.chars().count() == PhoneNumber::SUBSCRIBER_DIGITS => {
            format!("+237 {}", group_in_threes(rest))
        }
        _ => group_in_threes(&cleaned),
    }
}

/// Strip spaces/dashes and a leading `+`, rejecting any other non-digit.
fn strip_separators(input: &str) -> Result<String, PhoneError> {
    let mut out = String::with_capacity(input.len());
    for (i, ch) in input.trim().chars().enumerate() {
        match ch {
            ' ' | '-' => {}
            '+' if i == 0 => {}
            c if c.is_ascii_digit() => out.push(c),
            c => return Err(PhoneError::InvalidCharacter(c)),
        }
    }
    Ok(out)
}

fn strip_country_code(digits: &str) -> &str {
    // Only treat "237" as a country code when a full subscriber number
    // follows it; "237123456" is itself a valid 9-digit fixed line.
    match digits.strip_prefix("237") {
        Some(rest) if rest.chars().count() == PhoneNumber::SUBSCRIBER_DIGITS => rest,
        _ => digits,
    }
}

fn group_in_threes(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
