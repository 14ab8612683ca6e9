use crate::value::Value;

/// The strict identity relation used by set-semantics operations
/// (deduplication, set membership of unique-value collections).
///
/// Primitives compare by value (`NaN` is reflexive, as in the engine);
/// opaque values compare by their reference-identity token when both carry
/// one. Every other kind is identical only under actual reference identity,
/// so two separately-built containers are never "identical" even when they
/// are deeply equal.
///
/// # Example
///
/// ```
/// use arraykit_value_equal::{same_identity, Value};
/// use serde_json::json;
///
/// assert!(same_identity(&Value::Number(2.0), &Value::Number(2.0)));
///
/// let a = Value::from(json!([1]));
/// let b = Value::from(json!([1]));
/// assert!(!same_identity(&a, &b)); // distinct containers
/// assert!(same_identity(&a, &a));
/// ```
pub fn same_identity(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Opaque(x), Value::Opaque(y)) => {
            matches!((x.reference, y.reference), (Some(i), Some(j)) if i == j)
        }
        _ => false,
    }
}
