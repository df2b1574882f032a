//! FCFA formatting command.
//!
//! # Usage
//!
//! ```bash
//! kwatt-cli money format 150000 --locale fr
//! kwatt-cli money format 99999.5 --locale en
//! ```

use kwatt_core::{Locale, format_fcfa};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when formatting money from the shell.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// The amount argument is not a decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Format an FCFA amount with the locale's digit grouping.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidAmount`] when the amount does not parse as
/// a decimal number.
#[allow(clippy::print_stdout)]
pub fn format(amount: &str, locale: Locale) -> Result<(), MoneyError> {
    let amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|_| MoneyError::InvalidAmount(amount.to_owned()))?;

    println!("{}", format_fcfa(amount, locale));
    Ok(())
}
