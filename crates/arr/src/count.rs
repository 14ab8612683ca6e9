use arraykit_value_equal::{same_value, Value, ValueError};

use crate::seq::elements;

/// Tallies the elements deeply equal to `search`.
///
/// # Example
///
/// ```
/// use arraykit_arr::count;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 1, {"x": 1}, {"x": 1}]));
/// assert_eq!(count(&seq, &Value::from(json!(1))).unwrap(), 2);
/// assert_eq!(count(&seq, &Value::from(json!({"x": 1}))).unwrap(), 2);
/// ```
pub fn count(seq: &Value, search: &Value) -> Result<usize, ValueError> {
    let items = elements(seq)?;
    Ok(items.iter().filter(|item| same_value(item, search)).count())
}

/// Tallies the elements satisfying `predicate`, which receives
/// `(element, index, sequence)`.
pub fn count_by<P>(seq: &Value, mut predicate: P) -> Result<usize, ValueError>
where
    P: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(seq)?;
    let mut total = 0;
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            total += 1;
        }
    }
    Ok(total)
}
