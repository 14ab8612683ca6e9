use crate::error::ValueError;
use crate::same_value::same_entries;
use crate::value::Value;

/// Checked mapping comparison.
///
/// Both arguments must be `Object` values, otherwise
/// [`ValueError::InvalidArgument`] is returned. The key count is compared
/// first; then every key of `a` must exist in `b` with a recursively same
/// value. Key order is irrelevant.
///
/// # Example
///
/// ```
/// use arraykit_value_equal::{same_object, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"x": 1, "y": [2]}));
/// let b = Value::from(json!({"y": [2], "x": 1}));
/// assert!(same_object(&a, &b).unwrap());
/// ```
pub fn same_object(a: &Value, b: &Value) -> Result<bool, ValueError> {
    let entries_a = a.as_object().ok_or_else(|| ValueError::not_an_object(a.kind()))?;
    let entries_b = b.as_object().ok_or_else(|| ValueError::not_an_object(b.kind()))?;
    Ok(same_entries(entries_a, entries_b))
}
