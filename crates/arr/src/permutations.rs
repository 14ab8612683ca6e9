use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Returns all `n!` orderings of `seq`'s elements, in the order produced by
/// picking each remaining element in turn. Intended for small `n`; repeated
/// input values are not deduplicated.
///
/// # Example
///
/// ```
/// use arraykit_arr::permutations;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3]));
/// let all = permutations(&seq).unwrap();
/// assert_eq!(all.as_array().unwrap().len(), 6);
/// ```
pub fn permutations(seq: &Value) -> Result<Value, ValueError> {
    let items = elements(seq)?;
    let mut pool = items.to_vec();
    let mut current = Vec::with_capacity(pool.len());
    let mut out = Vec::new();
    permute(&mut pool, &mut current, &mut out);
    Ok(Value::Array(out))
}

fn permute(pool: &mut Vec<Value>, current: &mut Vec<Value>, out: &mut Vec<Value>) {
    if pool.is_empty() {
        out.push(Value::Array(current.clone()));
        return;
    }
    for i in 0..pool.len() {
        let picked = pool.remove(i);
        current.push(picked);
        permute(pool, current, out);
        if let Some(picked) = current.pop() {
            pool.insert(i, picked);
        }
    }
}
