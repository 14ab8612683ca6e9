use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements_mut;

/// Exchanges the elements at `i` and `j` in place. The caller must hold
/// exclusive access to `seq` for the duration of the call.
///
/// Fails with a `Range` error when either index is out of bounds, before
/// anything is moved.
///
/// # Example
///
/// ```
/// use arraykit_arr::swap;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let mut seq = Value::from(json!([4, 2, 3, 1, 5]));
/// swap(&mut seq, 0, 3).unwrap();
/// assert_eq!(seq, Value::from(json!([1, 2, 3, 4, 5])));
/// ```
pub fn swap(seq: &mut Value, i: usize, j: usize) -> Result<(), ValueError> {
    let items = elements_mut(seq)?;
    let len = items.len();
    if i >= len || j >= len {
        return Err(ValueError::Range(format!(
            "swap indices {i} and {j} out of bounds for length {len}"
        )));
    }
    items.swap(i, j);
    Ok(())
}
