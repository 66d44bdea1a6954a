//! Date utilities for Awl.
//!
//! Conversion between unix timestamps, local time, and UTC, plus the
//! absolute difference between two dates. The public entry points read
//! the system offset; every operation also has a `_with_offset` variant
//! taking an explicit [`chrono::FixedOffset`], which is what the tests
//! use.
//!
//! # Key Types
//!
//! - [`ConversionMode`] / [`Conversion`] -- One instant, every rendering
//! - [`DateDelta`] -- Totals and mixed-radix breakdown of a span

pub mod convert;
pub mod delta;
pub mod error;

pub use convert::{convert, convert_with_offset, Conversion, ConversionMode};
pub use delta::{date_diff, date_diff_with_offset, DateDelta};
pub use error::{TimeError, TimeResult};
