//! arraykit-value-equal - structural deep equality over heterogeneous
//! runtime values.
//!
//! The engine classifies both operands into a [`ValueKind`] and dispatches
//! to a kind-specific rule, recursing through sequence elements and mapping
//! values. Values outside the enumerated kinds travel as [`Opaque`] tokens
//! and fall back to an ordered chain of identity checks.
//!
//! - [`same_value`] — total comparison, never errors.
//! - [`same_array`] / [`same_object`] — checked entry points that require a
//!   sequence/mapping argument.
//! - [`same_identity`] — the strict identity relation set-semantics
//!   operations are built on.
//!
//! # Example
//!
//! ```
//! use arraykit_value_equal::{same_value, Value};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"users": [{"id": 1}, {"id": 2}]}));
//! let b = Value::from(json!({"users": [{"id": 1}, {"id": 2}]}));
//! assert!(same_value(&a, &b));
//! ```

mod error;
mod key_order;
mod same_array;
mod same_identity;
mod same_object;
mod same_value;
mod value;

pub use error::ValueError;
pub use key_order::compare_keys;
pub use same_array::same_array;
pub use same_identity::same_identity;
pub use same_object::same_object;
pub use same_value::same_value;
pub use value::{Opaque, Pattern, Value, ValueKind};
