use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Returns every index whose element satisfies `predicate`, with the same
/// scan and limit policy as [`crate::all_index_of`].
///
/// The predicate receives `(element, index, sequence)` and any panic inside
/// it propagates to the caller unchanged.
///
/// # Example
///
/// ```
/// use arraykit_arr::find_index_all;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!(["Hello", "World", "Hi", "!"]));
/// let starts_with_h = |v: &Value, _: usize, _: &[Value]| {
///     matches!(v, Value::String(s) if s.starts_with('H'))
/// };
/// assert_eq!(find_index_all(&seq, starts_with_h, None).unwrap(), vec![0, 2]);
/// ```
pub fn find_index_all<P>(
    seq: &Value,
    mut predicate: P,
    limit: Option<usize>,
) -> Result<Vec<usize>, ValueError>
where
    P: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(seq)?;
    let mut indices = Vec::new();
    if limit == Some(0) {
        return Ok(indices);
    }
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            indices.push(index);
            if limit.is_some_and(|limit| indices.len() >= limit) {
                break;
            }
        }
    }
    Ok(indices)
}
