use arraykit_value_equal::{Value, ValueError};
use indexmap::IndexMap;

use crate::seq::elements;

/// Builds a mapping from the property-key form of `key_fn(element)` to the
/// sequence of elements sharing that key. Groups appear in first-encounter
/// order and elements keep their original relative order within each group;
/// no element is ever dropped.
///
/// Group keys must be primitives (string, number, boolean, null); any other
/// kind is an `InvalidArgument`.
///
/// # Example
///
/// ```
/// use arraykit_arr::group_by;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 4, 5]));
/// let grouped = group_by(&seq, |v| match v {
///     Value::Number(n) if n % 2.0 == 0.0 => Value::from("even"),
///     _ => Value::from("odd"),
/// })
/// .unwrap();
/// assert_eq!(
///     grouped,
///     Value::from(json!({"odd": [1, 3, 5], "even": [2, 4]}))
/// );
/// ```
pub fn group_by<K>(seq: &Value, mut key_fn: K) -> Result<Value, ValueError>
where
    K: FnMut(&Value) -> Value,
{
    let items = elements(seq)?;
    let mut groups: IndexMap<String, Vec<Value>> = IndexMap::new();
    for item in items {
        let key = property_key(&key_fn(item))?;
        groups.entry(key).or_default().push(item.clone());
    }
    Ok(Value::Object(
        groups
            .into_iter()
            .map(|(key, members)| (key, Value::Array(members)))
            .collect(),
    ))
}

/// Property-key string form of a primitive group key. Integral numbers
/// render without a decimal point so `Number(2.0)` and a literal `2` key the
/// same group.
fn property_key(key: &Value) -> Result<String, ValueError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 => {
            Ok(format!("{}", *n as i64))
        }
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(ValueError::InvalidArgument(format!(
            "group key must be a primitive, found {}",
            other.kind()
        ))),
    }
}
