use crate::error::ValueError;
use crate::same_value::same_elements;
use crate::value::Value;

/// Checked array comparison.
///
/// Both arguments must be `Array` values, otherwise
/// [`ValueError::InvalidArgument`] is returned. A length mismatch yields
/// `Ok(false)` immediately, with no element recursion; otherwise the result
/// is the conjunction of [`crate::same_value`] over every index pair,
/// order-sensitive and with no canonicalization.
///
/// # Example
///
/// ```
/// use arraykit_value_equal::{same_array, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!([1, [2, 3]]));
/// let b = Value::from(json!([1, [2, 3]]));
/// assert!(same_array(&a, &b).unwrap());
///
/// assert!(same_array(&a, &Value::Null).is_err());
/// ```
pub fn same_array(a: &Value, b: &Value) -> Result<bool, ValueError> {
    let items_a = a.as_array().ok_or_else(|| ValueError::not_an_array(a.kind()))?;
    let items_b = b.as_array().ok_or_else(|| ValueError::not_an_array(b.kind()))?;
    Ok(same_elements(items_a, items_b))
}
