use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Partitions `seq` into consecutive sub-sequences of length `size`; the
/// final chunk may be shorter. A zero size is a `Range` error (it would
/// never make progress).
///
/// # Example
///
/// ```
/// use arraykit_arr::chunk;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
/// assert_eq!(
///     chunk(&seq, 2).unwrap(),
///     Value::from(json!([[1, 2], [3, 4], [5, 6], [7, 8], [9, 10]]))
/// );
/// ```
pub fn chunk(seq: &Value, size: usize) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    if size == 0 {
        return Err(ValueError::Range("chunk size must be at least 1".into()));
    }
    let groups = items
        .chunks(size)
        .map(|group| Value::Array(group.to_vec()))
        .collect();
    Ok(Value::Array(groups))
}
