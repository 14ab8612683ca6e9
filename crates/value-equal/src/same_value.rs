//! The core comparison: [`same_value`].

use crate::value::{Opaque, Value};
use indexmap::IndexMap;

/// Decides whether two values are structurally the same.
///
/// Precedence:
///
/// 1. Reference identity (`std::ptr::eq`) short-circuits to `true`.
/// 2. `NaN` is equal to `NaN` (unlike default float comparison).
/// 3. Differing kinds are never equal, even when a keys/values reading
///    might otherwise match (an array is not an object of indices).
/// 4. Kind-specific rules; arrays, sets and object values recurse through
///    `same_value`. Recursion is depth-unbounded; `Value` trees are owned
///    and therefore acyclic, so the walk always terminates.
/// 5. Opaque values run the fallback chain: reference identity, blueprint
///    identity, constructor identity, constructor name, constructor
///    textual form, textual form. The first token both operands carry
///    decides; no shared token means `false`.
///
/// Total over all inputs: never panics, never errors. Symmetric in every
/// branch; not guaranteed transitive once the opaque fallback chain is
/// reached (accepted policy of the fallback design).
///
/// # Example
///
/// ```
/// use arraykit_value_equal::{same_value, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"nested": [1, 2, {"deep": true}]}));
/// let b = Value::from(json!({"nested": [1, 2, {"deep": true}]}));
/// assert!(same_value(&a, &b));
///
/// assert!(same_value(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
/// assert!(!same_value(&Value::Number(1.0), &Value::String("1".into())));
/// ```
pub fn same_value(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    if a.kind() != b.kind() {
        return false;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::Regex(x), Value::Regex(y)) => x.source == y.source && x.flags == y.flags,
        (Value::Binary(x), Value::Binary(y)) => x.len() == y.len() && x == y,
        // Sets compare as ordered sequences of their enumeration order.
        (Value::Array(x), Value::Array(y)) | (Value::Set(x), Value::Set(y)) => {
            same_elements(x, y)
        }
        (Value::Object(x), Value::Object(y)) => same_entries(x, y),
        (Value::Opaque(x), Value::Opaque(y)) => same_opaque(x, y),
        _ => false,
    }
}

/// Order-sensitive elementwise walk; length mismatch short-circuits with no
/// recursion.
pub(crate) fn same_elements(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for i in 0..a.len() {
        if !same_value(&a[i], &b[i]) {
            return false;
        }
    }
    true
}

/// Key-driven entry walk; key count short-circuits first, key order is
/// irrelevant.
pub(crate) fn same_entries(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, value_a) in a {
        match b.get(key) {
            Some(value_b) => {
                if !same_value(value_a, value_b) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

fn same_opaque(a: &Opaque, b: &Opaque) -> bool {
    if let (Some(x), Some(y)) = (a.reference, b.reference) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.blueprint, b.blueprint) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.constructor, b.constructor) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (&a.constructor_name, &b.constructor_name) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (&a.constructor_source, &b.constructor_source) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (&a.source, &b.source) {
        return x == y;
    }
    false
}
