//! The closed set of value types a context key may hold.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single piece of context data attached to a failure.
///
/// The set of alternatives is closed: exactly one is active at a time, and
/// the caller-supplied Rust type decides the alternative at insertion time.
/// Floating-point inputs are always stored as `F64`, signed integrals as
/// `I64`, and unsigned integrals as `U64`; no further promotion happens
/// after storage. Types outside the conversion set below do not convert at
/// all; attaching one is a compile-time error, not a runtime failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Key present, no payload (flag semantics).
    Empty,
    /// A boolean.
    Bool(bool),
    /// A signed 64-bit integer.
    I64(i64),
    /// An unsigned 64-bit integer.
    U64(u64),
    /// A double-precision float.
    F64(f64),
    /// A UTF-8 string.
    Str(String),
}

impl Value {
    /// Renders this value as plain text.
    ///
    /// `Empty` renders as the empty string, booleans as `true`/`false`,
    /// strings as themselves, and numerics as their canonical decimal text.
    /// Total; never fails.
    pub fn to_text(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Bool(v) => {
                if *v {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            Value::I64(v) => v.to_string(),
            Value::U64(v) => v.to_string(),
            Value::F64(v) => v.to_string(),
            Value::Str(v) => v.clone(),
        }
    }

    /// Returns `true` if this is the payload-less flag marker.
    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

macro_rules! from_signed {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::I64(v as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::U64(v as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F64(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(v: Cow<'_, str>) -> Self {
        Value::Str(v.into_owned())
    }
}

/// Typed retrieval out of a stored [`Value`].
///
/// The ladder is fixed: an exact alternative match returns the value
/// unchanged; `String` accepts any alternative via [`Value::to_text`];
/// numeric targets accept any numeric alternative via an `as` cast; every
/// other combination yields `None`.
pub trait FromValue: Sized {
    /// Extracts `Self` from `value`, or `None` if the stored alternative
    /// does not convert.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::I64(v) => Some(*v),
            Value::U64(v) => Some(*v as i64),
            Value::F64(v) => Some(*v as i64),
            _ => None,
        }
    }
}

impl FromValue for u64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::U64(v) => Some(*v),
            Value::I64(v) => Some(*v as u64),
            Value::F64(v) => Some(*v as u64),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::F64(v) => Some(*v),
            Value::I64(v) => Some(*v as f64),
            Value::U64(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_picks_alternative_by_input_type() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(-7i32), Value::I64(-7));
        assert_eq!(Value::from(7u16), Value::U64(7));
        assert_eq!(Value::from(1.5f32), Value::F64(1.5));
        assert_eq!(Value::from(1.5f64), Value::F64(1.5));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert_eq!(Value::from("hi".to_string()), Value::Str("hi".to_string()));
    }

    #[test]
    fn to_text_forms() {
        assert_eq!(Value::Empty.to_text(), "");
        assert_eq!(Value::Bool(true).to_text(), "true");
        assert_eq!(Value::Bool(false).to_text(), "false");
        assert_eq!(Value::I64(-42).to_text(), "-42");
        assert_eq!(Value::U64(42).to_text(), "42");
        assert_eq!(Value::F64(2.5).to_text(), "2.5");
        assert_eq!(Value::Str("say".to_string()).to_text(), "say");
    }

    #[test]
    fn exact_match_returns_value_unchanged() {
        assert_eq!(bool::from_value(&Value::Bool(true)), Some(true));
        assert_eq!(i64::from_value(&Value::I64(-3)), Some(-3));
        assert_eq!(u64::from_value(&Value::U64(3)), Some(3));
        assert_eq!(f64::from_value(&Value::F64(0.25)), Some(0.25));
        assert_eq!(
            String::from_value(&Value::Str("x".to_string())),
            Some("x".to_string())
        );
    }

    #[test]
    fn numeric_cross_casts() {
        assert_eq!(i64::from_value(&Value::U64(9)), Some(9));
        assert_eq!(u64::from_value(&Value::I64(9)), Some(9));
        assert_eq!(f64::from_value(&Value::I64(2)), Some(2.0));
        assert_eq!(i64::from_value(&Value::F64(2.9)), Some(2));
    }

    #[test]
    fn string_accepts_any_alternative() {
        assert_eq!(String::from_value(&Value::Empty), Some(String::new()));
        assert_eq!(String::from_value(&Value::Bool(false)), Some("false".to_string()));
        assert_eq!(String::from_value(&Value::U64(7)), Some("7".to_string()));
    }

    #[test]
    fn non_convertible_combinations_yield_none() {
        assert_eq!(bool::from_value(&Value::I64(1)), None);
        assert_eq!(bool::from_value(&Value::Empty), None);
        assert_eq!(i64::from_value(&Value::Str("3".to_string())), None);
        assert_eq!(f64::from_value(&Value::Bool(true)), None);
        assert_eq!(u64::from_value(&Value::Empty), None);
    }

    #[test]
    fn serde_json_typing() {
        assert_eq!(serde_json::to_string(&Value::Empty).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::I64(-1)).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Value::U64(1)).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&Value::Str("s".to_string())).unwrap(),
            "\"s\""
        );
    }
}
