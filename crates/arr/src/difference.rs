use arraykit_value_equal::{same_value, Value, ValueError};

use crate::seq::{dedup_same_value, elements};

/// Symmetric set difference under deep equality.
///
/// Both inputs are deduplicated (first occurrence wins) and the result holds
/// the elements appearing in exactly one of the two deduplicated inputs,
/// ordered by first occurrence in deduplicated `seq` then deduplicated
/// `other`.
///
/// # Example
///
/// ```
/// use arraykit_arr::difference;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!([1, 2, 3, 4, 5]));
/// let b = Value::from(json!([3, 4, 5, 6, 7]));
/// assert_eq!(difference(&a, &b).unwrap(), Value::from(json!([1, 2, 6, 7])));
/// ```
pub fn difference(seq: &Value, other: &Value) -> Result<Value, ValueError> {
    let unique_a = dedup_same_value(elements(seq)?);
    let unique_b = dedup_same_value(elements(other)?);
    let mut out = Vec::new();
    for item in &unique_a {
        if !unique_b.iter().any(|candidate| same_value(candidate, item)) {
            out.push((*item).clone());
        }
    }
    for item in &unique_b {
        if !unique_a.iter().any(|candidate| same_value(candidate, item)) {
            out.push((*item).clone());
        }
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_elements_unique_to_either_side() {
        let a = Value::from(json!([1, 2, 3]));
        let b = Value::from(json!([2, 3, 4]));
        assert_eq!(difference(&a, &b).unwrap(), Value::from(json!([1, 4])));
    }

    #[test]
    fn duplicates_within_one_input_do_not_leak() {
        let a = Value::from(json!([1, 1, 2, 2]));
        let b = Value::from(json!([2]));
        assert_eq!(difference(&a, &b).unwrap(), Value::from(json!([1])));
    }

    #[test]
    fn deep_elements_participate() {
        let a = Value::from(json!([{"id": 1}, {"id": 2}]));
        let b = Value::from(json!([{"id": 2}, {"id": 3}]));
        assert_eq!(
            difference(&a, &b).unwrap(),
            Value::from(json!([{"id": 1}, {"id": 3}]))
        );
    }

    #[test]
    fn identical_inputs_yield_empty() {
        let a = Value::from(json!([1, 2]));
        let b = Value::from(json!([2, 1]));
        assert_eq!(difference(&a, &b).unwrap(), Value::from(json!([])));
    }

    #[test]
    fn requires_arrays_on_both_sides() {
        let a = Value::from(json!([1]));
        assert!(difference(&a, &Value::Null).is_err());
        assert!(difference(&Value::Null, &a).is_err());
    }
}
