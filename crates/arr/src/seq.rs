//! Shared sequence-argument checks and dedup helpers.

use arraykit_value_equal::{same_value, Value, ValueError};

/// Borrows the elements of a required sequence argument, or fails fast with
/// `InvalidArgument` before any work is performed.
pub(crate) fn elements(seq: &Value) -> Result<&[Value], ValueError> {
    seq.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValueError::expected_array(seq.kind()))
}

/// Mutable counterpart of [`elements`], for the two in-place operations.
pub(crate) fn elements_mut(seq: &mut Value) -> Result<&mut Vec<Value>, ValueError> {
    let kind = seq.kind();
    seq.as_array_mut()
        .ok_or_else(|| ValueError::expected_array(kind))
}

/// First-occurrence dedup under deep equality. Quadratic, which is the cost
/// of set semantics without a hashable canonical form (this is not a hashing
/// system).
pub(crate) fn dedup_same_value(items: &[Value]) -> Vec<&Value> {
    let mut unique: Vec<&Value> = Vec::new();
    for item in items {
        if !unique.iter().any(|seen| same_value(seen, item)) {
            unique.push(item);
        }
    }
    unique
}
