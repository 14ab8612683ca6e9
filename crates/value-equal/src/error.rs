use thiserror::Error;

use crate::value::ValueKind;

/// Errors raised by the checked equality entry points and by the array
/// algorithms built on top of them.
///
/// [`crate::same_value`] itself never raises: incomparable value pairs
/// resolve to `false`, keeping it total over all inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A required argument has an unsupported kind. Raised before any work
    /// is performed, so failing calls never partially mutate anything.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument is syntactically valid but out of bounds.
    #[error("out of range: {0}")]
    Range(String),
}

impl ValueError {
    pub(crate) fn not_an_array(found: ValueKind) -> Self {
        ValueError::InvalidArgument(format!("expected an array, found {found}"))
    }

    pub(crate) fn not_an_object(found: ValueKind) -> Self {
        ValueError::InvalidArgument(format!("expected an object, found {found}"))
    }

    /// An `InvalidArgument` for a sequence argument of the wrong kind.
    /// Exposed for downstream crates that perform the same check.
    pub fn expected_array(found: ValueKind) -> Self {
        ValueError::not_an_array(found)
    }
}
