//! # Pliant Value
//!
//! Safe, chainable, best-effort type coercion over loosely-typed data.
//!
//! A raw value is wrapped once into a [`Dyn`]; every navigation step and
//! transform yields a new `Dyn`, and a failure anywhere in the chain becomes
//! an ordinary value that flows through the remaining steps until it is
//! extracted or replaced with [`Dyn::catch`].
//!
//! ## Key Components
//!
//! - **[`Value`]**: the closed set of payload variants
//! - **[`Dyn`]**: a payload or a sticky [`ValueError`]
//! - **Accessors**: `to_*` returns a [`ValueResult`], `*_or_zero` the kind's
//!   zero value on failure
//! - **Navigation**: [`Dyn::key`], [`Dyn::index`], [`Dyn::len`], [`Dyn::has_key`]
//! - **Transforms**: [`Dyn::clip`], [`Dyn::limit`], [`Dyn::lookup`],
//!   [`Dyn::one_of`], [`Dyn::upper`], [`Dyn::lower`], [`Dyn::apply`]
//!
//! ## Usage
//!
//! ```rust
//! use pliant_value::{Dyn, Map, Value};
//!
//! let config = Dyn::new(Map::from([
//!     ("workers".to_owned(), Value::text("0x10")),
//!     ("mode".to_owned(), Value::text("Fast")),
//! ]));
//!
//! assert_eq!(config.key("workers").clip(1, 8).to_u32(), Ok(8));
//! assert_eq!(
//!     config.key("mode").lower().one_of(["fast", "safe"]).text_or_zero(),
//!     "fast"
//! );
//! assert_eq!(config.key("retries").catch(3).i64_or_zero(), 3);
//! ```

pub mod convert;
pub mod dynamic;
pub mod error;
#[cfg(feature = "json")]
mod json;
pub mod kind;
mod ops;
mod path;
pub mod value;

pub use convert::zero_time;
pub use dynamic::Dyn;
pub use error::{ExternalError, ValueError, ValueResult};
pub use kind::ValueKind;
pub use value::{Map, Seq, Timestamp, Value};

/// Common prelude
pub mod prelude {
    pub use super::{Dyn, Map, Seq, Value, ValueError, ValueKind, ValueResult};
}
