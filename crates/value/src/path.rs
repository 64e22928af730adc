//! Keyed and indexed navigation.
//!
//! One segment per call: there is no path syntax. Chain calls to descend.

use crate::dynamic::Dyn;
use crate::error::{ValueError, ValueResult};
use crate::value::Value;

impl Value {
    /// Borrow the value under `key` of a mapping.
    pub fn get(&self, key: &str) -> ValueResult<&Value> {
        match self {
            Self::Map(map) => map.get(key).ok_or_else(|| ValueError::key_not_found(key)),
            other => Err(ValueError::not_a_mapping(other.kind())),
        }
    }

    /// Borrow the element at `index` of a sequence.
    ///
    /// Negative indices are out of bounds.
    pub fn at(&self, index: isize) -> ValueResult<&Value> {
        match self {
            Self::Seq(seq) => usize::try_from(index)
                .ok()
                .and_then(|i| seq.get(i))
                .ok_or_else(|| ValueError::index_out_of_bounds(index, seq.len())),
            other => Err(ValueError::not_a_sequence(other.kind())),
        }
    }

    /// Element count of a sequence or key count of a mapping.
    pub fn len(&self) -> ValueResult<usize> {
        match self {
            Self::Seq(seq) => Ok(seq.len()),
            Self::Map(map) => Ok(map.len()),
            other => Err(ValueError::length_unsupported(other.kind())),
        }
    }

    /// Whether a sequence or mapping has no entries.
    pub fn is_empty(&self) -> ValueResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// Whether a mapping contains `key`.
    pub fn has_key(&self, key: &str) -> ValueResult<bool> {
        match self {
            Self::Map(map) => Ok(map.contains_key(key)),
            other => Err(ValueError::key_lookup_unsupported(other.kind())),
        }
    }
}

impl Dyn {
    /// Descend into a mapping by key.
    ///
    /// An error already held by the chain is returned unchanged, before any
    /// type check.
    pub fn key(&self, key: &str) -> Dyn {
        self.with(|v| v.get(key).cloned()).into()
    }

    /// Descend into a sequence by position.
    pub fn index(&self, index: isize) -> Dyn {
        self.with(|v| v.at(index).cloned()).into()
    }

    /// Length of a sequence or mapping.
    pub fn len(&self) -> ValueResult<usize> {
        self.with(Value::len)
    }

    /// Length, `0` on failure.
    pub fn len_or_zero(&self) -> usize {
        self.len().unwrap_or_default()
    }

    /// Whether a sequence or mapping has no entries.
    pub fn is_empty(&self) -> ValueResult<bool> {
        self.with(Value::is_empty)
    }

    /// Key presence in a mapping.
    pub fn has_key(&self, key: &str) -> ValueResult<bool> {
        self.with(|v| v.has_key(key))
    }

    /// Key presence, `false` on failure.
    pub fn has_key_or_zero(&self, key: &str) -> bool {
        self.has_key(key).unwrap_or_default()
    }
}
