//! CLI command implementations.

pub mod datetime;
pub mod money;
pub mod phone;
