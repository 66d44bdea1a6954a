//! Positional line diff between two text buffers.
//!
//! Lines are paired strictly by index: line `i` of the old buffer is
//! compared with line `i` of the new buffer, and no realignment is ever
//! attempted. An insertion near the top therefore marks every following
//! position as changed. That is the intended trade: the output maps
//! one-to-one onto the rows of a side-by-side view, and the cost stays
//! linear in the longer buffer.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Display text reported for an unchanged empty line.
///
/// Blank lines that match on both sides still occupy a row in the output;
/// substituting a visible placeholder keeps them from rendering as nothing.
pub const EMPTY_LINE_PLACEHOLDER: &str = "(empty line)";

/// A single classified line in a positional diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineChange {
    /// The line is identical at this position in both buffers.
    Unchanged(String),
    /// The line occupies this position only in the new buffer.
    Added(String),
    /// The line occupies this position only in the old buffer.
    Removed(String),
}

impl LineChange {
    /// The text carried by this change.
    pub fn text(&self) -> &str {
        match self {
            LineChange::Unchanged(text) | LineChange::Added(text) | LineChange::Removed(text) => {
                text
            }
        }
    }
}

/// The result of comparing two text buffers position by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Classified lines in top-to-bottom order.
    pub changes: Vec<LineChange>,
}

impl LineDiff {
    /// Returns true if the diff holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Total number of entries in the diff.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if any line was added or removed.
    pub fn has_changes(&self) -> bool {
        self.changes
            .iter()
            .any(|c| !matches!(c, LineChange::Unchanged(_)))
    }

    /// Number of unchanged lines.
    pub fn unchanged(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Unchanged(_)))
            .count()
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Added(_)))
            .count()
    }

    /// Number of removed lines.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, LineChange::Removed(_)))
            .count()
    }
}

/// Compare two text buffers line by line, pairing lines by index.
///
/// Both buffers are split on `'\n'`, so a trailing newline contributes a
/// final empty segment. Positions run from zero to the longer buffer's
/// line count; a buffer too short to reach a position contributes an
/// empty line there.
///
/// At each position:
///
/// - equal lines yield one [`LineChange::Unchanged`], with empty text
///   replaced by [`EMPTY_LINE_PLACEHOLDER`];
/// - differing lines yield [`LineChange::Removed`] with the old text,
///   then [`LineChange::Added`] with the new text, skipping whichever
///   side is empty. A position where only one side has text therefore
///   produces a single entry, never a blank counterpart.
pub fn diff_lines(old: &str, new: &str) -> LineDiff {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let positions = old_lines.len().max(new_lines.len());

    let mut changes = Vec::with_capacity(positions);
    for i in 0..positions {
        let old_line = old_lines.get(i).copied().unwrap_or("");
        let new_line = new_lines.get(i).copied().unwrap_or("");

        if old_line == new_line {
            let text = if old_line.is_empty() {
                EMPTY_LINE_PLACEHOLDER
            } else {
                old_line
            };
            changes.push(LineChange::Unchanged(text.to_string()));
        } else {
            if !old_line.is_empty() {
                changes.push(LineChange::Removed(old_line.to_string()));
            }
            if !new_line.is_empty() {
                changes.push(LineChange::Added(new_line.to_string()));
            }
        }
    }

    LineDiff { changes }
}

/// Zero-based positions at which the two buffers differ.
///
/// Positions past the end of the shorter buffer compare against the empty
/// line, so the set is symmetric in its arguments. Gutter highlighting on
/// either side of a split view reads straight from it.
pub fn differing_line_indices(old: &str, new: &str) -> BTreeSet<usize> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let positions = old_lines.len().max(new_lines.len());

    (0..positions)
        .filter(|&i| {
            old_lines.get(i).copied().unwrap_or("") != new_lines.get(i).copied().unwrap_or("")
        })
        .collect()
}
