use std::cmp::Ordering;

use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Returns the element with the largest numeric value, or `None` when no
/// element is numeric. Non-numeric elements (and `NaN`) are skipped, never
/// an error; the first extreme element wins on ties.
///
/// # Example
///
/// ```
/// use arraykit_arr::max;
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([3, "x", 7, null, 5]));
/// assert_eq!(max(&seq).unwrap(), Some(Value::from(json!(7))));
/// ```
pub fn max(seq: &Value) -> Result<Option<Value>, ValueError> {
    extremum(seq, Clone::clone, Ordering::Greater)
}

/// [`max`] keyed by `value_fn`; the returned value is the original element,
/// not the derived number.
pub fn max_by<F>(seq: &Value, value_fn: F) -> Result<Option<Value>, ValueError>
where
    F: FnMut(&Value) -> Value,
{
    extremum(seq, value_fn, Ordering::Greater)
}

/// Returns the element with the smallest numeric value; see [`max`].
pub fn min(seq: &Value) -> Result<Option<Value>, ValueError> {
    extremum(seq, Clone::clone, Ordering::Less)
}

/// [`min`] keyed by `value_fn`.
pub fn min_by<F>(seq: &Value, value_fn: F) -> Result<Option<Value>, ValueError>
where
    F: FnMut(&Value) -> Value,
{
    extremum(seq, value_fn, Ordering::Less)
}

fn extremum<F>(seq: &Value, mut value_fn: F, keep: Ordering) -> Result<Option<Value>, ValueError>
where
    F: FnMut(&Value) -> Value,
{
    let items = elements(seq)?;
    let mut best: Option<(&Value, f64)> = None;
    for item in items {
        let derived = match value_fn(item) {
            Value::Number(n) if !n.is_nan() => n,
            _ => continue,
        };
        match best {
            Some((_, incumbent)) if derived.partial_cmp(&incumbent) != Some(keep) => {}
            _ => best = Some((item, derived)),
        }
    }
    Ok(best.map(|(item, _)| item.clone()))
}
