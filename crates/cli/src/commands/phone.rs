//! Phone number validation and formatting commands.
//!
//! # Usage
//!
//! ```bash
//! kwatt-cli phone check "+237 612 345 678"
//! kwatt-cli phone format 612345678
//! ```

use kwatt_core::{PhoneError, PhoneNumber, format_phone_number};

/// Validate a Cameroonian phone number.
///
/// Prints the canonical international form on success; an invalid number
/// surfaces the parse error (and a nonzero exit) so scripts can gate on it.
///
/// # Errors
///
/// Returns the underlying [`PhoneError`] when the number is not a valid
/// Cameroonian phone number.
#[allow(clippy::print_stdout)]
pub fn check(number: &str) -> Result<(), PhoneError> {
    let phone = PhoneNumber::parse(number)?;
    println!("valid: {}", phone.display_international());
    Ok(())
}

/// Print the best-effort display form of a raw phone string.
#[allow(clippy::print_stdout)]
pub fn format(number: &str) {
    println!("{}", format_phone_number(number));
}
