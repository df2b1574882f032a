//! Money amounts with locale-aware FCFA display.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Locale;

/// ISO 4217 currency codes accepted on the platform.
///
/// Listings are priced in FCFA; the other codes exist for diaspora payment
/// flows where the payer's bank settles in a foreign currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    /// Central African CFA franc.
    #[default]
    Xaf,
    Eur,
    Usd,
}

impl CurrencyCode {
    /// The display suffix or symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Xaf => "FCFA",
            Self::Eur => "€",
            Self::Usd => "$",
        }
    }

    /// The ISO 4217 code (e.g. `"XAF"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Xaf => "XAF",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }
}

/// A monetary amount paired with its currency.
///
/// Amounts use decimal arithmetic; XAF is a zero-decimal currency, so
/// display rounds to whole francs (half away from zero).
///
/// ## Examples
///
/// ```
/// use kwatt_core::{CurrencyCode, Locale, Money};
///
/// let rent = Money::from_major(150_000, CurrencyCode::Xaf);
/// assert_eq!(rent.format(Locale::Fr), "150 000 FCFA");
/// assert_eq!(rent.format(Locale::En), "150,000 FCFA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (francs, not centimes).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Create an amount from a whole number of currency units.
    #[must_use]
    pub fn from_major(units: i64, currency: CurrencyCode) -> Self {
        Self {
            amount: Decimal::from(units),
            currency,
        }
    }

    /// Format for display with the locale's digit grouping.
    ///
    /// XAF renders with a trailing `FCFA` suffix (`"150 000 FCFA"`);
    /// other currencies render with a leading symbol (`"€1,200"`).
    /// Negative amounts keep a leading minus sign.
    #[must_use]
    pub fn format(&self, locale: Locale) -> String {
        let grouped = group_whole_units(self.amount, locale);
        match self.currency {
            CurrencyCode::Xaf => format!("{grouped} {}", self.currency.symbol()),
            CurrencyCode::Eur | CurrencyCode::Usd => {
                format!("{}{grouped}", self.currency.symbol())
            }
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Locale::default()))
    }
}

/// Format an FCFA amount as `"<grouped-number> FCFA"`.
///
/// The thousands separator follows the locale's numeric convention: a space
/// for French, a comma for English. Zero renders `"0 FCFA"`.
#[must_use]
pub fn format_fcfa(amount: Decimal, locale: Locale) -> String {
    Money::new(amount, CurrencyCode::Xaf).format(locale)
}

/// Round to whole units and insert the locale's thousands separator.
fn group_whole_units(amount: Decimal, locale: Locale) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let separator = match locale {
        Locale::Fr => ' ',
        Locale::En => ',',
    };

    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
