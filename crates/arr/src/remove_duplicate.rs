use arraykit_value_equal::{same_identity, Value, ValueError};

use crate::seq::elements;

/// Returns `seq`'s elements in first-occurrence order with exact duplicates
/// removed.
///
/// Duplicates are decided by identity ([`same_identity`]), not deep
/// equality: primitives dedupe by value, while two separately-built
/// containers are kept even when deeply equal.
///
/// # Example
///
/// ```
/// use arraykit_arr::remove_duplicate;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 4, 5, 1, 2, 3]));
/// assert_eq!(
///     remove_duplicate(&seq).unwrap(),
///     Value::from(json!([1, 2, 3, 4, 5]))
/// );
/// ```
pub fn remove_duplicate(seq: &Value) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    let mut unique: Vec<Value> = Vec::new();
    for item in items {
        if !unique.iter().any(|seen| same_identity(seen, item)) {
            unique.push(item.clone());
        }
    }
    Ok(Value::Array(unique))
}

/// [`remove_duplicate`] with uniqueness decided by the identity of
/// `key_fn(element)` rather than the element itself.
///
/// # Example
///
/// ```
/// use arraykit_arr::unique_by;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([{"id": 1, "v": "a"}, {"id": 1, "v": "b"}, {"id": 2}]));
/// let out = unique_by(&seq, |v| {
///     v.as_object().and_then(|o| o.get("id")).cloned().unwrap_or(Value::Null)
/// })
/// .unwrap();
/// assert_eq!(out, Value::from(json!([{"id": 1, "v": "a"}, {"id": 2}])));
/// ```
pub fn unique_by<K>(seq: &Value, mut key_fn: K) -> Result<Value, ValueError>
where
    K: FnMut(&Value) -> Value,
{
    let items = elements(seq)?;
    let mut keys: Vec<Value> = Vec::new();
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        let key = key_fn(item);
        if !keys.iter().any(|seen| same_identity(seen, &key)) {
            keys.push(key);
            out.push(item.clone());
        }
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_first_occurrence_order() {
        let seq = Value::from(json!([3, 1, 3, 2, 1]));
        assert_eq!(
            remove_duplicate(&seq).unwrap(),
            Value::from(json!([3, 1, 2]))
        );
    }

    #[test]
    fn is_idempotent() {
        let seq = Value::from(json!(["a", "b", "a", "c", "b"]));
        let once = remove_duplicate(&seq).unwrap();
        let twice = remove_duplicate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn deeply_equal_containers_are_not_duplicates() {
        let seq = Value::from(json!([[1], [1]]));
        assert_eq!(remove_duplicate(&seq).unwrap(), Value::from(json!([[1], [1]])));
    }

    #[test]
    fn nan_dedupes_with_itself() {
        let seq = Value::Array(vec![Value::Number(f64::NAN), Value::Number(f64::NAN)]);
        let out = remove_duplicate(&seq).unwrap();
        assert_eq!(out.as_array().unwrap().len(), 1);
    }

    #[test]
    fn unique_by_uses_derived_keys() {
        let seq = Value::from(json!(["apple", "avocado", "banana"]));
        let out = unique_by(&seq, |v| match v {
            Value::String(s) => Value::String(s[..1].to_string()),
            other => other.clone(),
        })
        .unwrap();
        assert_eq!(out, Value::from(json!(["apple", "banana"])));
    }

    #[test]
    fn requires_an_array() {
        assert!(remove_duplicate(&Value::Number(3.0)).is_err());
        assert!(unique_by(&Value::Null, |v| v.clone()).is_err());
    }
}
