//! Diff engines for Awl.
//!
//! Computes structured comparisons between two inputs: a positional line
//! diff over raw text and a recursive structural diff over parsed JSON
//! values. Both engines are pure functions of their inputs -- no I/O, no
//! retained state, full recomputation on every call.
//!
//! # Key Types
//!
//! - [`LineDiff`] / [`LineChange`] -- Index-aligned line classification
//! - [`ValueDiff`] / [`ValueChange`] -- Path-addressed structural changes

pub mod error;
pub mod line_diff;
pub mod value_diff;

pub use error::{DiffError, DiffResult};
pub use line_diff::{
    diff_lines, differing_line_indices, LineChange, LineDiff, EMPTY_LINE_PLACEHOLDER,
};
pub use value_diff::{
    diff_values, diff_values_with_limit, ValueChange, ValueDiff, DEFAULT_MAX_DEPTH, ROOT_PATH,
};
