use arraykit_value_equal::{same_value, Value, ValueError};

use crate::seq::{dedup_same_value, elements};

/// Set intersection under deep equality.
///
/// Both inputs are deduplicated; the smaller collection is iterated and its
/// elements kept when present in the larger one, so the result follows the
/// smaller collection's enumeration order.
///
/// # Example
///
/// ```
/// use arraykit_arr::similar;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!([1, 2, 3, 4, 5]));
/// let b = Value::from(json!([3, 4, 5, 6, 7]));
/// assert_eq!(similar(&a, &b).unwrap(), Value::from(json!([3, 4, 5])));
/// ```
pub fn similar(seq: &Value, other: &Value) -> Result<Value, ValueError> {
    let unique_a = dedup_same_value(elements(seq)?);
    let unique_b = dedup_same_value(elements(other)?);
    let (smaller, larger) = if unique_a.len() > unique_b.len() {
        (&unique_b, &unique_a)
    } else {
        (&unique_a, &unique_b)
    };
    let mut out = Vec::new();
    for item in smaller.iter() {
        if larger.iter().any(|candidate| same_value(candidate, item)) {
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
    fn smaller_side_drives_the_order() {
        let small = Value::from(json!([5, 3]));
        let large = Value::from(json!([1, 2, 3, 4, 5]));
        assert_eq!(similar(&large, &small).unwrap(), Value::from(json!([5, 3])));
    }

    #[test]
    fn disjoint_inputs_yield_empty() {
        let a = Value::from(json!([1, 2]));
        let b = Value::from(json!([3, 4]));
        assert_eq!(similar(&a, &b).unwrap(), Value::from(json!([])));
    }

    #[test]
    fn duplicates_collapse_before_intersecting() {
        let a = Value::from(json!([1, 1, 2]));
        let b = Value::from(json!([1, 1, 1, 3]));
        assert_eq!(similar(&a, &b).unwrap(), Value::from(json!([1])));
    }

    #[test]
    fn deep_membership() {
        let a = Value::from(json!([[1, 2], [3]]));
        let b = Value::from(json!([[3], [4]]));
        assert_eq!(similar(&a, &b).unwrap(), Value::from(json!([[3]])));
    }

    #[test]
    fn requires_arrays_on_both_sides() {
        assert!(similar(&Value::from(json!([])), &Value::Bool(true)).is_err());
    }
}
