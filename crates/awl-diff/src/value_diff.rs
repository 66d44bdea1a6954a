//! Structural diff between two JSON values.
//!
//! Values are walked recursively and every divergence is reported against
//! a dot-joined path ("config.retries.max"). Objects are compared key by
//! key; arrays are opaque leaves, so an unequal array surfaces as a single
//! [`ValueChange::Modified`] entry rather than an element-wise report.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DiffError, DiffResult};

/// Path reported for a divergence at the top level of the compared values.
pub const ROOT_PATH: &str = "root";

/// Depth limit applied by [`diff_values`].
///
/// Matches the parser's own recursion limit, so any value that came out of
/// `serde_json::from_str` diffs without tripping the guard.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A single divergence between two JSON values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueChange {
    /// A key present only in the new value.
    Added { path: String, new: Value },
    /// A key present only in the old value.
    Removed { path: String, old: Value },
    /// A value that differs between the two sides.
    Modified {
        path: String,
        old: Value,
        new: Value,
    },
}

impl ValueChange {
    /// The dot-joined path this change addresses.
    pub fn path(&self) -> &str {
        match self {
            ValueChange::Added { path, .. }
            | ValueChange::Removed { path, .. }
            | ValueChange::Modified { path, .. } => path,
        }
    }
}

/// The result of structurally comparing two JSON values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueDiff {
    /// Divergences in traversal order: for each object level, removals and
    /// modifications in the old value's key order, then additions in the
    /// new value's key order.
    pub changes: Vec<ValueChange>,
}

impl ValueDiff {
    /// Returns true if the two values compared equal.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Total number of divergences.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added keys.
    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, ValueChange::Added { .. }))
            .count()
    }

    /// Number of removed keys.
    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, ValueChange::Removed { .. }))
            .count()
    }

    /// Number of modified values.
    pub fn modifications(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, ValueChange::Modified { .. }))
            .count()
    }
}

/// Compare two JSON values with the default depth limit.
///
/// Equal values (key order notwithstanding) produce an empty diff.
pub fn diff_values(old: &Value, new: &Value) -> DiffResult<ValueDiff> {
    diff_values_with_limit(old, new, DEFAULT_MAX_DEPTH)
}

/// Compare two JSON values, refusing to descend more than `max_depth`
/// object levels below the root.
///
/// The guard exists for programmatically built values; returns
/// [`DiffError::DepthLimitExceeded`] when comparison would need to recurse
/// past the limit.
pub fn diff_values_with_limit(
    old: &Value,
    new: &Value,
    max_depth: usize,
) -> DiffResult<ValueDiff> {
    let mut changes = Vec::new();
    walk(old, new, "", 0, max_depth, &mut changes)?;
    Ok(ValueDiff { changes })
}

fn walk(
    old: &Value,
    new: &Value,
    path: &str,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<ValueChange>,
) -> DiffResult<()> {
    if depth > max_depth {
        return Err(DiffError::DepthLimitExceeded { limit: max_depth });
    }

    // Equality short-circuits the whole subtree.
    if old == new {
        return Ok(());
    }

    match (old, new) {
        (Value::Object(old_map), Value::Object(new_map)) => {
            // Phase one: the old value's keys, in its own order.
            for (key, old_val) in old_map {
                let child = join_path(path, key);
                match new_map.get(key) {
                    None => out.push(ValueChange::Removed {
                        path: child,
                        old: old_val.clone(),
                    }),
                    Some(new_val) if old_val == new_val => {}
                    Some(new_val) => {
                        // Recurse only when both sides stay objects; any
                        // other divergence is a leaf-level modification.
                        if old_val.is_object() && new_val.is_object() {
                            walk(old_val, new_val, &child, depth + 1, max_depth, out)?;
                        } else {
                            out.push(ValueChange::Modified {
                                path: child,
                                old: old_val.clone(),
                                new: new_val.clone(),
                            });
                        }
                    }
                }
            }
            // Phase two: keys only the new value has, in its order.
            for (key, new_val) in new_map {
                if !old_map.contains_key(key) {
                    out.push(ValueChange::Added {
                        path: join_path(path, key),
                        new: new_val.clone(),
                    });
                }
            }
        }
        // Scalars, arrays, nulls, and type changes: one entry, no descent.
        _ => out.push(ValueChange::Modified {
            path: path_or_root(path),
            old: old.clone(),
            new: new.clone(),
        }),
    }

    Ok(())
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn path_or_root(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// Generate an arbitrary JSON value a few levels deep.
    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// A value diffed against itself reports nothing.
        #[test]
        fn self_diff_is_empty(value in arb_value()) {
            let diff = diff_values(&value, &value).unwrap();
            prop_assert!(diff.is_empty());
        }

        /// The diff is empty exactly when the values compare equal.
        #[test]
        fn emptiness_matches_equality(a in arb_value(), b in arb_value()) {
            let diff = diff_values(&a, &b).unwrap();
            prop_assert_eq!(diff.is_empty(), a == b);
        }

        /// Repeated runs over the same inputs report the same changes.
        #[test]
        fn diff_is_deterministic(a in arb_value(), b in arb_value()) {
            let first = diff_values(&a, &b).unwrap();
            let second = diff_values(&a, &b).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Swapping the sides turns additions into removals and keeps the
        /// total number of divergences.
        #[test]
        fn swapping_sides_swaps_added_and_removed(a in arb_value(), b in arb_value()) {
            let forward = diff_values(&a, &b).unwrap();
            let backward = diff_values(&b, &a).unwrap();
            prop_assert_eq!(forward.additions(), backward.removals());
            prop_assert_eq!(forward.removals(), backward.additions());
            prop_assert_eq!(forward.modifications(), backward.modifications());
            prop_assert_eq!(forward.len(), backward.len());
        }

        /// Every reported path is non-empty.
        #[test]
        fn paths_are_never_empty(a in arb_value(), b in arb_value()) {
            let diff = diff_values(&a, &b).unwrap();
            for change in &diff.changes {
                prop_assert!(!change.path().is_empty());
            }
        }
    }
}
