use arraykit_value_equal::{Value, ValueError};
use rand::Rng;

use crate::seq::elements;

/// Returns a new sequence holding a uniformly-random permutation of `seq`'s
/// elements (Fisher-Yates). Does not mutate `seq`.
///
/// Uses the thread-local RNG; use [`shuffle_with_rng`] to supply a seeded
/// source for deterministic runs.
pub fn shuffle(seq: &Value) -> Result<Value, ValueError> {
    shuffle_with_rng(seq, &mut rand::thread_rng())
}

/// [`shuffle`] with a caller-supplied random source.
///
/// # Example
///
/// ```
/// use arraykit_arr::shuffle_with_rng;
/// use arraykit_value_equal::Value;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256StarStar;
/// use serde_json::json;
///
/// let seq = Value::from(json!([1, 2, 3, 4, 5]));
/// let mut rng = Xoshiro256StarStar::seed_from_u64(7);
/// let shuffled = shuffle_with_rng(&seq, &mut rng).unwrap();
/// assert_eq!(shuffled.as_array().unwrap().len(), 5);
/// ```
pub fn shuffle_with_rng<R>(seq: &Value, rng: &mut R) -> Result<Value, ValueError>
where
    R: Rng + ?Sized,
{
    let mut items = elements(seq)?.to_vec();
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    Ok(Value::Array(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use serde_json::json;

    #[test]
    fn output_is_a_permutation() {
        let seq = Value::from(json!([1, 2, 3, 4, 5, 6, 7, 8]));
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        let shuffled = shuffle_with_rng(&seq, &mut rng).unwrap();
        let mut sorted: Vec<String> = shuffled
            .as_array()
            .unwrap()
            .iter()
            .map(|v| format!("{v:?}"))
            .collect();
        sorted.sort();
        let mut expected: Vec<String> = seq
            .as_array()
            .unwrap()
            .iter()
            .map(|v| format!("{v:?}"))
            .collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn input_is_not_mutated() {
        let seq = Value::from(json!([1, 2, 3]));
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let _ = shuffle_with_rng(&seq, &mut rng).unwrap();
        assert_eq!(seq, Value::from(json!([1, 2, 3])));
    }

    #[test]
    fn same_seed_same_permutation() {
        let seq = Value::from(json!([1, 2, 3, 4, 5]));
        let mut a = Xoshiro256StarStar::seed_from_u64(9);
        let mut b = Xoshiro256StarStar::seed_from_u64(9);
        assert_eq!(
            shuffle_with_rng(&seq, &mut a).unwrap(),
            shuffle_with_rng(&seq, &mut b).unwrap()
        );
    }

    #[test]
    fn empty_and_singleton_are_fine() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert_eq!(
            shuffle_with_rng(&Value::from(json!([])), &mut rng).unwrap(),
            Value::from(json!([]))
        );
        assert_eq!(
            shuffle_with_rng(&Value::from(json!([1])), &mut rng).unwrap(),
            Value::from(json!([1]))
        );
    }

    #[test]
    fn requires_an_array() {
        assert!(shuffle(&Value::Null).is_err());
    }
}
