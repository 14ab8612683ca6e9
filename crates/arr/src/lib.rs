//! arraykit-arr - array transformation algorithms built on the
//! deep-equality engine of `arraykit-value-equal`.
//!
//! Every operation is a pure, synchronous call over a sequence `Value`;
//! element-level "sameness" is decided by the equality engine wherever
//! deduplication, counting, searching or set operations need it. The only
//! two operations that mutate their input are [`push_with_sort`] /
//! [`push_with_sort_by`] and [`swap`], which require exclusive access to
//! the sequence for the duration of the call; everything else returns a new
//! container.
//!
//! Required sequence arguments are validated up front: a non-array argument
//! fails with [`ValueError::InvalidArgument`] before any work is done, and
//! out-of-bounds numeric arguments fail with [`ValueError::Range`].
//!
//! # Example
//!
//! ```
//! use arraykit_arr::{difference, remove_duplicate};
//! use arraykit_value_equal::Value;
//! use serde_json::json;
//!
//! let a = Value::from(json!([1, 2, 3, 4, 5, 1]));
//! assert_eq!(
//!     remove_duplicate(&a).unwrap(),
//!     Value::from(json!([1, 2, 3, 4, 5]))
//! );
//!
//! let b = Value::from(json!([3, 4, 5, 6, 7]));
//! assert_eq!(
//!     difference(&remove_duplicate(&a).unwrap(), &b).unwrap(),
//!     Value::from(json!([1, 2, 6, 7]))
//! );
//! ```

mod all_index_of;
mod chunk;
mod concat_all;
mod convert;
mod count;
mod difference;
mod filter_and_map;
mod find_index_all;
mod flatten;
mod group_by;
mod min_max;
mod permutations;
mod push_with_sort;
mod remove_duplicate;
mod seq;
mod shuffle;
mod similar;
mod swap;

pub use all_index_of::all_index_of;
pub use chunk::chunk;
pub use concat_all::concat_all;
pub use convert::{reverse, to_object, to_set};
pub use count::{count, count_by};
pub use difference::difference;
pub use filter_and_map::{filter_and_map, FilterAndMapOptions};
pub use find_index_all::find_index_all;
pub use flatten::flatten;
pub use group_by::group_by;
pub use min_max::{max, max_by, min, min_by};
pub use permutations::permutations;
pub use push_with_sort::{push_with_sort, push_with_sort_by};
pub use remove_duplicate::{remove_duplicate, unique_by};
pub use shuffle::{shuffle, shuffle_with_rng};
pub use similar::similar;
pub use swap::swap;

// Re-export the engine's error type; it is the error surface of this crate.
pub use arraykit_value_equal::ValueError;
