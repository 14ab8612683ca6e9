use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Returns a new sequence of `seq`'s elements followed by each member of
/// `others` in argument order, flattening exactly one level of the `others`
/// list: an `Array` contributes its members, any other value contributes
/// itself. Nested elements are not flattened.
///
/// # Example
///
/// ```
/// use arraykit_arr::concat_all;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2]));
/// let others = vec![Value::from(json!([3, 4])), Value::from(json!(5))];
/// assert_eq!(
///     concat_all(&seq, &others).unwrap(),
///     Value::from(json!([1, 2, 3, 4, 5]))
/// );
/// ```
pub fn concat_all(seq: &Value, others: &[Value]) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    let mut merged = items.to_vec();
    for other in others {
        match other {
            Value::Array(members) => merged.extend(members.iter().cloned()),
            value => merged.push(value.clone()),
        }
    }
    Ok(Value::Array(merged))
}
