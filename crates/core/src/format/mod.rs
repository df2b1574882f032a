//! Display formatting helpers.
//!
//! Everything here is a pure function from value to display string. Output
//! is meant for UI surfaces, so invalid input degrades to a safe default
//! rather than an error.

pub mod datetime;
pub mod relative;
pub mod text;

pub use datetime::{DateStyle, TimeStyle, format_date, format_time};
pub use relative::{format_relative_time, format_relative_time_at};
pub use text::{initials, truncate};
