use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Concatenates nested sequence elements into a new sequence, descending up
/// to `depth` levels. A `depth <= 0` returns a shallow copy with no
/// flattening.
///
/// # Example
///
/// ```
/// use arraykit_arr::flatten;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, [2, [3, [4]]]]));
/// assert_eq!(flatten(&seq, 1).unwrap(), Value::from(json!([1, 2, [3, [4]]])));
/// assert_eq!(flatten(&seq, 2).unwrap(), Value::from(json!([1, 2, 3, [4]])));
/// assert_eq!(flatten(&seq, 0).unwrap(), seq);
/// ```
pub fn flatten(seq: &Value, depth: isize) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    let mut out = Vec::with_capacity(items.len());
    flatten_into(items, depth, &mut out);
    Ok(Value::Array(out))
}

fn flatten_into(items: &[Value], depth: isize, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Array(inner) if depth > 0 => flatten_into(inner, depth - 1, out),
            other => out.push(other.clone()),
        }
    }
}
