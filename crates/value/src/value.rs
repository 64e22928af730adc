//! The payload enum wrapped by every chain.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::kind::ValueKind;

/// Ordered sequence of values.
pub type Seq = Vec<Value>;

/// Keyed mapping from text to value. Insertion order is not preserved.
pub type Map = HashMap<String, Value>;

/// Instant with nanosecond precision and a fixed UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Loosely-typed payload.
///
/// A `Value` is exactly one of these variants; it is never mutated by the
/// coercion API, every operation yields a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent payload (e.g. a decoded `null`). Every conversion rejects it.
    #[default]
    Null,

    /// Signed integer, any width up to 64 bits
    Int(i64),

    /// Unsigned integer, any width up to 64 bits
    Uint(u64),

    /// Floating point, stored widened to 64 bits
    Float(f64),

    /// Boolean
    Bool(bool),

    /// UTF-8 text
    Text(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Instant with timezone offset
    Timestamp(Timestamp),

    /// Ordered sequence
    Seq(Seq),

    /// Text-keyed mapping
    Map(Map),
}

impl Value {
    /// Create a text value from String or &str
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create a bytes value
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Int(_) => ValueKind::Int,
            Self::Uint(_) => ValueKind::Uint,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Seq(_) => ValueKind::Sequence,
            Self::Map(_) => ValueKind::Mapping,
        }
    }
}

// ==================== From<native> ====================

macro_rules! impl_from_lossless {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_lossless!(Int, i64: i8, i16, i32, i64);
impl_from_lossless!(Uint, u64: u8, u16, u32, u64);
impl_from_lossless!(Float, f64: f32, f64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Timestamp(v.fixed_offset())
    }
}

impl From<Seq> for Value {
    fn from(v: Seq) -> Self {
        Self::Seq(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().collect())
    }
}
