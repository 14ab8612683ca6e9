use std::cmp::Ordering;

use crate::error::ValueError;
use crate::value::Value;

/// Ordered comparison of sort keys.
///
/// Only `Number` and `String` keys are ordered; numbers use `total_cmp` so
/// `NaN` keys still sort deterministically. Any other pairing is an
/// [`ValueError::InvalidArgument`] rather than a silent always-false
/// comparison.
pub fn compare_keys(a: &Value, b: &Value) -> Result<Ordering, ValueError> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.total_cmp(y)),
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        _ => Err(ValueError::InvalidArgument(format!(
            "sort keys must both be numbers or both be strings, found {} and {}",
            a.kind(),
            b.kind()
        ))),
    }
}
