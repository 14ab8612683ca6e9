use arraykit_value_equal::{same_value, Value, ValueError};

use crate::seq::elements;

/// Returns every index at which `search` occurs in `seq`, by deep equality.
///
/// The scan stops early once `limit` matches have been collected; `None`
/// means unbounded. No match yields an empty vector.
///
/// # Example
///
/// ```
/// use arraykit_arr::all_index_of;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 1, 1]));
/// let one = Value::from(json!(1));
/// assert_eq!(all_index_of(&seq, &one, None).unwrap(), vec![0, 3, 4]);
/// assert_eq!(all_index_of(&seq, &one, Some(2)).unwrap(), vec![0, 3]);
/// ```
pub fn all_index_of(
    seq: &Value,
    search: &Value,
    limit: Option<usize>,
) -> Result<Vec<usize>, ValueError> {
    let items = elements(seq)?;
    let mut indices = Vec::new();
    if limit == Some(0) {
        return Ok(indices);
    }
    for (index, item) in items.iter().enumerate() {
        if same_value(item, search) {
            indices.push(index);
            if limit.is_some_and(|limit| indices.len() >= limit) {
                break;
            }
        }
    }
    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finds_deeply_equal_elements() {
        let seq = Value::from(json!([{"a": 1}, {"a": 2}, {"a": 1}]));
        let search = Value::from(json!({"a": 1}));
        assert_eq!(all_index_of(&seq, &search, None).unwrap(), vec![0, 2]);
    }

    #[test]
    fn empty_result_when_absent() {
        let seq = Value::from(json!([1, 2, 3]));
        let search = Value::from(json!(6));
        assert!(all_index_of(&seq, &search, None).unwrap().is_empty());
    }

    #[test]
    fn limit_zero_collects_nothing() {
        let seq = Value::from(json!([1, 1, 1]));
        let search = Value::from(json!(1));
        assert!(all_index_of(&seq, &search, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn requires_an_array() {
        assert!(all_index_of(&Value::Null, &Value::Null, None).is_err());
    }
}
