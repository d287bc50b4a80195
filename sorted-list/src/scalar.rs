//! Scalar values and the kinds a list can be locked to.
//!
//! A [`SortedList`](crate::SortedList) holds exactly one [`Kind`] of
//! [`Scalar`]. Ordering is only defined between scalars of the same kind:
//! `Scalar::Integer(1) < Scalar::Text("a")` is neither true nor false, it is
//! `None` from [`PartialOrd::partial_cmp`].

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidKind;

/// The scalar category of a stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Signed 64-bit integers, ordered numerically.
    Integer,
    /// UTF-8 strings, ordered lexicographically by byte (code point order).
    Text,
}

impl Kind {
    /// Canonical lowercase name, as written in snapshots.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Text => "text",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a kind hint.
///
/// Accepts `int`/`integer` and `string`/`text`. Anything else is
/// [`InvalidKind::UnknownHint`].
impl FromStr for Kind {
    type Err = InvalidKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "integer" => Ok(Kind::Integer),
            "string" | "text" => Ok(Kind::Text),
            other => Err(InvalidKind::UnknownHint {
                given: other.to_owned(),
            }),
        }
    }
}

/// A single stored value.
///
/// Serializes untagged: integers as JSON numbers, text as JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// An integer value.
    Integer(i64),
    /// A text value.
    Text(String),
}

impl Scalar {
    /// Returns the kind tag of this value.
    #[inline]
    pub const fn kind(&self) -> Kind {
        match self {
            Scalar::Integer(_) => Kind::Integer,
            Scalar::Text(_) => Kind::Text,
        }
    }

    /// Returns the integer, if this is an integer.
    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(v) => Some(*v),
            Scalar::Text(_) => None,
        }
    }

    /// Returns the text, if this is text.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Integer(_) => None,
            Scalar::Text(s) => Some(s),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => Some(a.cmp(b)),
            (Scalar::Text(a), Scalar::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Scalar::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Scalar {
    #[inline]
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    #[inline]
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&String> for Scalar {
    #[inline]
    fn from(value: &String) -> Self {
        Scalar::Text(value.clone())
    }
}

/// Dynamically-typed input.
///
/// Integral numbers that fit in `i64` become [`Scalar::Integer`], strings
/// become [`Scalar::Text`]. Everything else is [`InvalidKind::Unsupported`].
impl TryFrom<Value> for Scalar {
    type Error = InvalidKind;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Scalar::Text(s)),
            other => Scalar::try_from(&other),
        }
    }
}

impl TryFrom<&Value> for Scalar {
    type Error = InvalidKind;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Scalar::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Scalar::Integer).ok_or_else(|| {
                InvalidKind::Unsupported {
                    given: if n.is_u64() { "out-of-range integer" } else { "float" }.to_owned(),
                }
            }),
            other => Err(InvalidKind::Unsupported {
                given: json_type_name(other).to_owned(),
            }),
        }
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
