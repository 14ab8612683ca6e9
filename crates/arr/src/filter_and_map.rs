use arraykit_value_equal::{Value, ValueError};

use crate::seq::elements;

/// Options for [`filter_and_map`].
#[derive(Default)]
pub struct FilterAndMapOptions<'a> {
    /// Stop once this many accepted elements have been produced.
    pub limit: Option<usize>,
    /// Index to start scanning at; negative values are clamped to 0 by
    /// design, not an error.
    pub start_index: isize,
    /// Alternate sequence scanned in place of `seq`.
    pub source: Option<&'a Value>,
}

/// Fused filter+map in a single pass, avoiding the intermediate filtered
/// sequence.
///
/// Scans `options.source` (defaulting to `seq`) from
/// `max(options.start_index, 0)`, appending `transform(element)` for every
/// element accepted by `predicate`, and stops once `options.limit` accepted
/// elements have been produced. Both callbacks receive
/// `(element, index, sequence)`.
///
/// # Example
///
/// ```
/// use arraykit_arr::{filter_and_map, FilterAndMapOptions};
/// use arraykit_value_equal::Value;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 4, 5]));
/// let doubled_tail = filter_and_map(
///     &seq,
///     |v, _, _| matches!(v, Value::Number(n) if *n > 2.0),
///     |v, _, _| match v {
///         Value::Number(n) => Value::Number(n * 2.0),
///         other => other.clone(),
///     },
///     FilterAndMapOptions { limit: Some(2), ..FilterAndMapOptions::default() },
/// )
/// .unwrap();
/// assert_eq!(doubled_tail, Value::from(json!([6, 8])));
/// ```
pub fn filter_and_map<P, M>(
    seq: &Value,
    mut predicate: P,
    mut transform: M,
    options: FilterAndMapOptions<'_>,
) -> Result<Value, ValueError>
where
    P: FnMut(&Value, usize, &[Value]) -> bool,
    M: FnMut(&Value, usize, &[Value]) -> Value,
{
    let base = elements(seq)?;
    let items = match options.source {
        Some(source) => elements(source)?,
        None => base,
    };
    let start = options.start_index.max(0) as usize;
    let mut out = Vec::new();
    if options.limit == Some(0) {
        return Ok(Value::Array(out));
    }
    for index in start..items.len() {
        let item = &items[index];
        if predicate(item, index, items) {
            out.push(transform(item, index, items));
            if options.limit.is_some_and(|limit| out.len() >= limit) {
                break;
            }
        }
    }
    Ok(Value::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gt(threshold: f64) -> impl FnMut(&Value, usize, &[Value]) -> bool {
        move |v, _, _| matches!(v, Value::Number(n) if *n > threshold)
    }

    fn double(v: &Value, _: usize, _: &[Value]) -> Value {
        match v {
            Value::Number(n) => Value::Number(n * 2.0),
            other => other.clone(),
        }
    }

    #[test]
    fn unbounded_pass() {
        let seq = Value::from(json!([1, 2, 3, 4, 5]));
        let out = filter_and_map(&seq, gt(2.0), double, FilterAndMapOptions::default()).unwrap();
        assert_eq!(out, Value::from(json!([6, 8, 10])));
    }

    #[test]
    fn limit_stops_after_enough_matches() {
        let seq = Value::from(json!([1, 2, 3, 4, 5]));
        let out = filter_and_map(
            &seq,
            gt(2.0),
            double,
            FilterAndMapOptions {
                limit: Some(2),
                ..FilterAndMapOptions::default()
            },
        )
        .unwrap();
        assert_eq!(out, Value::from(json!([6, 8])));
    }

    #[test]
    fn negative_start_index_clamps_to_zero() {
        let seq = Value::from(json!([3, 4]));
        let out = filter_and_map(
            &seq,
            gt(0.0),
            double,
            FilterAndMapOptions {
                start_index: -7,
                ..FilterAndMapOptions::default()
            },
        )
        .unwrap();
        assert_eq!(out, Value::from(json!([6, 8])));
    }

    #[test]
    fn start_index_skips_prefix() {
        let seq = Value::from(json!([9, 9, 1, 9]));
        let out = filter_and_map(
            &seq,
            gt(0.0),
            double,
            FilterAndMapOptions {
                start_index: 2,
                ..FilterAndMapOptions::default()
            },
        )
        .unwrap();
        assert_eq!(out, Value::from(json!([2, 18])));
    }

    #[test]
    fn source_overrides_the_scanned_sequence() {
        let seq = Value::from(json!([1]));
        let alt = Value::from(json!([10, 20]));
        let out = filter_and_map(
            &seq,
            gt(0.0),
            double,
            FilterAndMapOptions {
                source: Some(&alt),
                ..FilterAndMapOptions::default()
            },
        )
        .unwrap();
        assert_eq!(out, Value::from(json!([20, 40])));
    }

    #[test]
    fn seq_is_validated_even_when_source_is_given() {
        let alt = Value::from(json!([1]));
        let err = filter_and_map(
            &Value::Null,
            gt(0.0),
            double,
            FilterAndMapOptions {
                source: Some(&alt),
                ..FilterAndMapOptions::default()
            },
        );
        assert!(err.is_err());
    }
}
