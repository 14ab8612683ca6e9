use std::cmp::Ordering;

use arraykit_value_equal::{compare_keys, Value, ValueError};

use crate::seq::elements_mut;

/// Inserts `value` into an already-sorted `seq`, keeping element keys
/// non-decreasing. Mutates `seq` in place; the caller must hold exclusive
/// access for the duration of the call.
///
/// Sort keys are the elements themselves and must be numbers or strings.
///
/// # Example
///
/// ```
/// use arraykit_arr::push_with_sort;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let mut seq = Value::from(json!([1, 2, 4, 5]));
/// push_with_sort(&mut seq, Value::from(json!(3))).unwrap();
/// assert_eq!(seq, Value::from(json!([1, 2, 3, 4, 5])));
/// ```
pub fn push_with_sort(seq: &mut Value, value: Value) -> Result<(), ValueError> {
    push_with_sort_by(seq, value, Clone::clone)
}

/// [`push_with_sort`] with a caller-derived sort key.
///
/// The insertion point is found by binary search over `key_fn`-derived keys
/// (O(log n) comparisons) followed by a single shift-insert. Equal keys are
/// stable-append: the new value lands after existing equal-key entries. A
/// key of an unsupported kind fails with `InvalidArgument` before the
/// sequence is touched.
pub fn push_with_sort_by<K>(seq: &mut Value, value: Value, key_fn: K) -> Result<(), ValueError>
where
    K: Fn(&Value) -> Value,
{
    let items = elements_mut(seq)?;
    let key = key_fn(&value);
    // Reject unsupported key kinds even when the sequence is empty and the
    // search below would never compare anything.
    compare_keys(&key, &key)?;
    // Upper bound: first index whose key is strictly greater.
    let mut lo = 0usize;
    let mut hi = items.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match compare_keys(&key_fn(&items[mid]), &key)? {
            Ordering::Greater => hi = mid,
            _ => lo = mid + 1,
        }
    }
    items.insert(lo, value);
    Ok(())
}
