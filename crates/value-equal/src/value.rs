//! The runtime value model.
//!
//! [`Value`] is a closed tagged variant covering every kind of value the
//! equality engine can classify. Anything outside the enumerated kinds is
//! carried as an [`Opaque`] token (callables, error objects, deferred
//! handles, unique symbols, big integers) and compared through the opaque
//! fallback chain.

use indexmap::IndexMap;

use crate::error::ValueError;

/// A heterogeneous runtime value.
///
/// Container variants own their children, so a `Value` tree is always
/// acyclic and comparison recursion is bounded by the tree the caller built.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// Boolean primitive.
    Bool(bool),
    /// Numeric primitive. `NaN` is treated as equal to `NaN` by the engine.
    Number(f64),
    /// String primitive.
    String(String),
    /// Ordered sequence, compared elementwise and order-sensitively.
    Array(Vec<Value>),
    /// Unique-value collection. Enumeration (insertion) order is kept and
    /// respected by the engine, i.e. comparison is not set-invariant.
    Set(Vec<Value>),
    /// Key-value mapping. Insertion order is preserved but comparison is
    /// key-driven, not order-driven.
    Object(IndexMap<String, Value>),
    /// Calendar timestamp as epoch milliseconds.
    Date(i64),
    /// Pattern object (source text plus mode flags).
    Regex(Pattern),
    /// Fixed-length binary buffer.
    Binary(Vec<u8>),
    /// Anything the engine cannot inspect structurally.
    Opaque(Opaque),
}

/// Discriminator for [`Value`] variants, computed once per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Set,
    Object,
    Date,
    Regex,
    Binary,
    Opaque,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Set => "set",
            ValueKind::Object => "object",
            ValueKind::Date => "date",
            ValueKind::Regex => "regex",
            ValueKind::Binary => "binary",
            ValueKind::Opaque => "opaque",
        };
        write!(f, "{name}")
    }
}

/// A compiled-checked pattern object.
///
/// Equality is decided by `source` and `flags` alone; the constructor only
/// validates that the pattern text compiles and the flags are recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub source: String,
    pub flags: String,
}

impl Pattern {
    /// Builds a pattern, validating `source` with the `regex` crate and
    /// `flags` against the recognized flag set (`d g i m s u v y`).
    ///
    /// # Example
    ///
    /// ```
    /// use arraykit_value_equal::Pattern;
    ///
    /// let p = Pattern::new("^a+b$", "i").unwrap();
    /// assert_eq!(p.flags, "i");
    /// assert!(Pattern::new("a(", "").is_err());
    /// assert!(Pattern::new("a", "q").is_err());
    /// ```
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        for flag in flags.chars() {
            if !matches!(flag, 'd' | 'g' | 'i' | 'm' | 's' | 'u' | 'v' | 'y') {
                return Err(ValueError::InvalidArgument(format!(
                    "unknown pattern flag '{flag}'"
                )));
            }
        }
        regex::RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()
            .map_err(|e| ValueError::InvalidArgument(format!("invalid pattern: {e}")))?;
        Ok(Pattern {
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }
}

/// Identity tokens for values the engine cannot inspect.
///
/// Every field is optional; the fallback chain in `same_value` walks them in
/// declaration order and the first token **both** operands carry decides the
/// comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opaque {
    /// Reference identity of the underlying object.
    pub reference: Option<u64>,
    /// Identity of the shared prototype/blueprint.
    pub blueprint: Option<u64>,
    /// Identity of the constructor.
    pub constructor: Option<u64>,
    /// Constructor name.
    pub constructor_name: Option<String>,
    /// Constructor textual form.
    pub constructor_source: Option<String>,
    /// Textual form of the value itself.
    pub source: Option<String>,
}

impl Opaque {
    /// An opaque value known only by its reference identity.
    pub fn with_reference(reference: u64) -> Self {
        Opaque {
            reference: Some(reference),
            ..Opaque::default()
        }
    }

    /// An opaque value known by its constructor name.
    pub fn named(constructor_name: impl Into<String>) -> Self {
        Opaque {
            constructor_name: Some(constructor_name.into()),
            ..Opaque::default()
        }
    }

    /// An opaque value known only by its textual form.
    pub fn with_source(source: impl Into<String>) -> Self {
        Opaque {
            source: Some(source.into()),
            ..Opaque::default()
        }
    }
}

impl Value {
    /// The kind discriminator of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Set(_) => ValueKind::Set,
            Value::Object(_) => ValueKind::Object,
            Value::Date(_) => ValueKind::Date,
            Value::Regex(_) => ValueKind::Regex,
            Value::Binary(_) => ValueKind::Binary,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable access to the elements if this is an `Array`.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an `Object`.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<serde_json::Value> for Value {
    /// Lossless import of a JSON tree. Numbers widen to `f64`; object key
    /// order is preserved (`serde_json` is built with `preserve_order`).
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_covers_every_variant() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(Value::Number(1.0).kind(), ValueKind::Number);
        assert_eq!(Value::String("x".into()).kind(), ValueKind::String);
        assert_eq!(Value::Array(vec![]).kind(), ValueKind::Array);
        assert_eq!(Value::Set(vec![]).kind(), ValueKind::Set);
        assert_eq!(Value::Object(IndexMap::new()).kind(), ValueKind::Object);
        assert_eq!(Value::Date(0).kind(), ValueKind::Date);
        assert_eq!(Value::Binary(vec![]).kind(), ValueKind::Binary);
        assert_eq!(Value::Opaque(Opaque::default()).kind(), ValueKind::Opaque);
    }

    #[test]
    fn from_json_preserves_structure() {
        let v = Value::from(json!({"a": [1, "two", true, null]}));
        let obj = v.as_object().unwrap();
        let arr = obj["a"].as_array().unwrap();
        assert_eq!(arr[0], Value::Number(1.0));
        assert_eq!(arr[1], Value::String("two".into()));
        assert_eq!(arr[2], Value::Bool(true));
        assert_eq!(arr[3], Value::Null);
    }

    #[test]
    fn from_json_keeps_key_order() {
        let v = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn pattern_rejects_bad_source() {
        assert!(Pattern::new("(", "").is_err());
    }

    #[test]
    fn pattern_rejects_unknown_flag() {
        assert!(Pattern::new("a", "gx").is_err());
    }

    #[test]
    fn pattern_accepts_js_flag_set() {
        assert!(Pattern::new("a", "gimsy").is_ok());
    }
}
