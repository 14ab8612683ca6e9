//! One-line conversion wrappers over the sequence model.

use arraykit_value_equal::{same_identity, Value, ValueError};

use crate::seq::elements;

/// Returns a reversed copy of `seq`.
pub fn reverse(seq: &Value) -> Result<Value, ValueError> {
    Ok(Value::Array(elements(seq)?.iter().rev().cloned().collect()))
}

/// Converts `seq` to a mapping keyed by the decimal index of each element.
///
/// # Example
///
/// ```
/// use arraykit_arr::to_object;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!(["Hello", "World", "!"]));
/// assert_eq!(
///     to_object(&seq).unwrap(),
///     Value::from(json!({"0": "Hello", "1": "World", "2": "!"}))
/// );
/// ```
pub fn to_object(seq: &Value) -> Result<Value, ValueError> {
    Ok(Value::Object(
        elements(seq)?
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
    ))
}

/// Converts `seq` to a unique-value collection, deduplicating by identity
/// and keeping first-occurrence enumeration order.
pub fn to_set(seq: &Value) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    let mut unique: Vec<Value> = Vec::new();
    for item in items {
        if !unique.iter().any(|seen| same_identity(seen, item)) {
            unique.push(item.clone());
        }
    }
    Ok(Value::Set(unique))
}
