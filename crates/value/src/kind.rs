//! Value kinds.
//!
//! `ValueKind` is a lightweight classification for [`Value`](crate::Value)
//! used in error context and logging.
//!
//! ```rust
//! use pliant_value::{Value, ValueKind};
//!
//! let v = Value::from(3.5);
//! assert_eq!(v.kind(), ValueKind::Float);
//! assert_eq!(ValueKind::Mapping.name(), "mapping");
//! ```

use core::fmt::{Display, Formatter};

/// Represents the kind of a payload
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Int,
    Uint,
    Float,
    Bool,
    Text,
    Bytes,
    Timestamp,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "string",
            Self::Bytes => "bytes",
            Self::Timestamp => "timestamp",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
