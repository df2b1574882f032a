//! UI locale type with silent French fallback.

use core::convert::Infallible;
use core::fmt;

use serde::{Deserialize, Serialize};

/// The two locales the Kwatt UI ships in.
///
/// Resolution is total: any input that is not recognizably English maps to
/// French, the market default. No locale value is ever invalid.
///
/// ## Examples
///
/// ```
/// use kwatt_core::Locale;
///
/// assert_eq!(Locale::resolve(Some("fr-CM")), Locale::Fr);
/// assert_eq!(Locale::resolve(Some("EN-us")), Locale::En);
/// assert_eq!(Locale::resolve(Some("de")), Locale::Fr);
/// assert_eq!(Locale::resolve(None), Locale::Fr);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// French, the default for Cameroon.
    #[default]
    Fr,
    /// English.
    En,
}

impl Locale {
    /// Resolve a free-form locale string (cookie value, `Accept-Language`
    /// prefix, user setting) to a supported locale.
    ///
    /// Matching is case-insensitive and prefix-based, so `"en-US"`, `"en_GB"`,
    /// and `"EN"` all resolve to [`Locale::En`]. Anything unrecognized,
    /// empty, or absent falls back to [`Locale::Fr`].
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Fr;
        };
        let lower = value.to_lowercase();
        if lower.starts_with("en") {
            Self::En
        } else {
            // "fr" prefixes and everything else share the default.
            Self::Fr
        }
    }

    /// Returns the lowercase language tag (`"fr"` or `"en"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Returns the alternate locale, for the language toggle in the UI.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::resolve(Some(s)))
    }
}
