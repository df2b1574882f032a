//! Kwatt Core - Shared locale and formatting library.
//!
//! This crate provides the display logic shared by all Kwatt clients:
//! - `web` - Public-facing rental marketplace site
//! - `mobile` - Renter/landlord mobile app back end
//! - `cli` - Command-line tools for checking and formatting values
//!
//! # Architecture
//!
//! The core crate contains only pure value types and formatting functions -
//! no I/O, no database access, no HTTP clients. Every function is a
//! deterministic transform from input to output, safely callable from any
//! number of threads without coordination.
//!
//! # Modules
//!
//! - [`types`] - `Locale`, `Money`, `Timestamp`, and `PhoneNumber` value types
//! - [`format`] - Date/time, relative-time, and text display helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod format;
pub mod types;

pub use format::*;
pub use types::*;
