//! Value Error Types
//!
//! Every failure a chain can produce is a [`ValueError`]. The `Display` text of
//! each variant is part of the public contract and never includes the
//! structured context carried in its fields.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::kind::ValueKind;

/// Result alias used by every propagating accessor.
pub type ValueResult<T> = Result<T, ValueError>;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Conversion and access failures.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The payload cannot be coerced into the requested scalar.
    #[error("type conversion error")]
    Conversion {
        /// Kind of the payload that was asked to convert.
        from: ValueKind,
        /// Name of the requested target.
        to: &'static str,
    },

    /// Keyed access on a mapping that lacks the key.
    #[error("key not found")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// Table lookup or membership test found no entry for the key.
    #[error("key not found: {key}")]
    NoMatch {
        /// The stringified input.
        key: String,
    },

    /// Indexed access outside `[0, len)`.
    #[error("index out of bounds")]
    IndexOutOfBounds {
        /// Requested index.
        index: isize,
        /// Length of the sequence.
        len: usize,
    },

    /// Keyed access on something other than a mapping.
    #[error("type is not a mapping")]
    NotAMapping {
        /// Kind that was found instead.
        actual: ValueKind,
    },

    /// Indexed access on something other than a sequence.
    #[error("type is not a sequence")]
    NotASequence {
        /// Kind that was found instead.
        actual: ValueKind,
    },

    /// Length query on a scalar.
    #[error("type does not support length")]
    LengthUnsupported {
        /// Kind that was queried.
        actual: ValueKind,
    },

    /// Key-presence query on something other than a mapping.
    #[error("type does not support key lookup")]
    KeyLookupUnsupported {
        /// Kind that was queried.
        actual: ValueKind,
    },

    /// Range validation: value below the lower bound.
    #[error("lower limit overflow")]
    LowerLimit {
        /// Converted input.
        value: f64,
        /// Lower bound.
        min: f64,
    },

    /// Range validation: value above the upper bound.
    #[error("upper limit overflow")]
    UpperLimit {
        /// Converted input.
        value: f64,
        /// Upper bound.
        max: f64,
    },

    /// Failure raised by a caller-supplied chain step.
    #[error("{0}")]
    Custom(String),

    /// Native error wrapped at the boundary.
    #[error(transparent)]
    External(ExternalError),
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValueError {
    /// Create a conversion error
    pub fn conversion(from: ValueKind, to: &'static str) -> Self {
        tracing::trace!(%from, to, "type conversion failed");
        Self::Conversion { from, to }
    }

    /// Create a key not found error (keyed access)
    pub fn key_not_found(key: impl Into<String>) -> Self {
        let key = key.into();
        tracing::trace!(%key, "key not found");
        Self::KeyNotFound { key }
    }

    /// Create a no-match error (table lookup, membership)
    pub fn no_match(key: impl Into<String>) -> Self {
        let key = key.into();
        tracing::trace!(%key, "no table entry");
        Self::NoMatch { key }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: isize, len: usize) -> Self {
        tracing::trace!(index, len, "index out of bounds");
        Self::IndexOutOfBounds { index, len }
    }

    /// Create a keyed-access-on-non-mapping error
    pub fn not_a_mapping(actual: ValueKind) -> Self {
        tracing::trace!(%actual, "keyed access on non-mapping");
        Self::NotAMapping { actual }
    }

    /// Create an indexed-access-on-non-sequence error
    pub fn not_a_sequence(actual: ValueKind) -> Self {
        tracing::trace!(%actual, "indexed access on non-sequence");
        Self::NotASequence { actual }
    }

    /// Create a length-unsupported error
    pub fn length_unsupported(actual: ValueKind) -> Self {
        tracing::trace!(%actual, "length of non-collection");
        Self::LengthUnsupported { actual }
    }

    /// Create a key-lookup-unsupported error
    pub fn key_lookup_unsupported(actual: ValueKind) -> Self {
        tracing::trace!(%actual, "key presence on non-mapping");
        Self::KeyLookupUnsupported { actual }
    }

    /// Create an error raised by a custom chain step
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Wrap a native error
    pub fn external<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::External(ExternalError(Arc::new(error)))
    }

    /// Whether this error was produced by the coercion machinery itself,
    /// as opposed to a native error wrapped at the boundary.
    #[inline]
    pub fn is_coercion(&self) -> bool {
        !matches!(self, Self::External(_))
    }
}

// ============================================================================
// EXTERNAL ERRORS
// ============================================================================

/// Shared handle to a native error wrapped into a chain.
///
/// Two handles compare equal only when they point at the same error.
#[derive(Clone)]
pub struct ExternalError(Arc<dyn std::error::Error + Send + Sync + 'static>);

impl ExternalError {
    /// Borrow the wrapped error.
    pub fn get(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.0
    }
}

impl fmt::Debug for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for ExternalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl PartialEq for ExternalError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ValueError::conversion(ValueKind::Sequence, "i64"), "type conversion error")]
    #[case(ValueError::key_not_found("b"), "key not found")]
    #[case(ValueError::no_match("foo"), "key not found: foo")]
    #[case(ValueError::index_out_of_bounds(-1, 2), "index out of bounds")]
    #[case(ValueError::not_a_mapping(ValueKind::Int), "type is not a mapping")]
    #[case(ValueError::not_a_sequence(ValueKind::Text), "type is not a sequence")]
    #[case(ValueError::length_unsupported(ValueKind::Bool), "type does not support length")]
    #[case(
        ValueError::key_lookup_unsupported(ValueKind::Sequence),
        "type does not support key lookup"
    )]
    #[case(ValueError::LowerLimit { value: -1.0, min: 0.0 }, "lower limit overflow")]
    #[case(ValueError::UpperLimit { value: 11.0, max: 10.0 }, "upper limit overflow")]
    #[case(ValueError::custom("negative balance"), "negative balance")]
    fn messages_are_literal(#[case] err: ValueError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
        assert!(err.is_coercion());
    }

    #[test]
    fn external_keeps_native_message() {
        let io = std::io::Error::other("disk on fire");
        let err = ValueError::external(io);
        assert_eq!(err.to_string(), "disk on fire");
        assert!(!err.is_coercion());
    }

    #[test]
    fn external_equality_is_identity() {
        let a = ValueError::external(std::io::Error::other("x"));
        let b = ValueError::external(std::io::Error::other("x"));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
