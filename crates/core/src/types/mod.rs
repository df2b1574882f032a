//! Core value types for Kwatt.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod locale;
pub mod money;
pub mod phone;
pub mod timestamp;

pub use locale::Locale;
pub use money::{CurrencyCode, Money, format_fcfa};
pub use phone::{PhoneError, PhoneNumber, format_phone_number, is_valid_cameroon_phone};
pub use timestamp::{Timestamp, TimestampError};
