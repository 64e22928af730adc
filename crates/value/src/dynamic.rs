//! The chain wrapper.
//!
//! [`Dyn`] holds either a [`Value`] or the [`ValueError`] that some earlier
//! step produced. Every conversion, navigation and transform short-circuits on
//! the error, so a chain like
//!
//! ```rust
//! use pliant_value::{Dyn, Map, Value};
//!
//! let doc = Dyn::new(Map::from([("port".to_owned(), Value::text("8080"))]));
//! assert_eq!(doc.key("port").to_u16(), Ok(8080));
//! assert_eq!(doc.key("host").key("name").text_or_zero(), "");
//! ```
//!
//! never panics on malformed input.

use chrono::{DateTime, TimeZone};

use crate::convert::zero_time;
use crate::error::{ValueError, ValueResult};
use crate::value::{Map, Seq, Timestamp, Value};

/// Dynamic value: a payload or a sticky error.
#[derive(Debug, Clone, PartialEq)]
pub struct Dyn(ValueResult<Value>);

impl Dyn {
    // ==================== Construction ====================

    /// Wrap a payload.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(Ok(value.into()))
    }

    /// Wrap an error produced by this crate or a custom chain step.
    pub fn fail(error: ValueError) -> Self {
        Self(Err(error))
    }

    /// Wrap a native error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::fail(ValueError::external(error))
    }

    // ==================== Inspection ====================

    /// Whether the chain currently holds an error.
    #[inline]
    pub fn is_err(&self) -> bool {
        self.0.is_err()
    }

    /// Whether the chain currently holds a payload.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    /// The held error, if any.
    pub fn error(&self) -> Option<&ValueError> {
        self.0.as_ref().err()
    }

    /// The payload, or the held error.
    pub fn raw(&self) -> ValueResult<&Value> {
        self.0.as_ref().map_err(Clone::clone)
    }

    /// The payload, or `None` on error.
    pub fn raw_or_none(&self) -> Option<&Value> {
        self.0.as_ref().ok()
    }

    /// Consume the chain.
    pub fn into_result(self) -> ValueResult<Value> {
        self.0
    }

    // ==================== Combinators ====================

    /// Feed the payload to `f`; an error passes through untouched.
    pub fn and_then<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> ValueResult<Value>,
    {
        Self(self.0.and_then(f))
    }

    /// Borrowing counterpart of [`and_then`](Self::and_then) for accessors.
    pub(crate) fn with<T, F>(&self, f: F) -> ValueResult<T>
    where
        F: FnOnce(&Value) -> ValueResult<T>,
    {
        match &self.0 {
            Ok(value) => f(value),
            Err(e) => Err(e.clone()),
        }
    }

    // ==================== Accessors ====================

    /// Convert to `i64`.
    pub fn to_i64(&self) -> ValueResult<i64> {
        self.with(Value::to_i64)
    }

    /// Convert to `i64`, `0` on failure.
    pub fn i64_or_zero(&self) -> i64 {
        self.to_i64().unwrap_or_default()
    }

    /// Convert to `u64`.
    pub fn to_u64(&self) -> ValueResult<u64> {
        self.with(Value::to_u64)
    }

    /// Convert to `u64`, `0` on failure.
    pub fn u64_or_zero(&self) -> u64 {
        self.to_u64().unwrap_or_default()
    }

    /// Convert to `f64`.
    pub fn to_f64(&self) -> ValueResult<f64> {
        self.with(Value::to_f64)
    }

    /// Convert to `f64`, `0.0` on failure.
    pub fn f64_or_zero(&self) -> f64 {
        self.to_f64().unwrap_or_default()
    }

    /// Convert to `f32` by narrowing the `f64` conversion.
    pub fn to_f32(&self) -> ValueResult<f32> {
        self.to_f64().map(|v| v as f32)
    }

    /// Convert to `f32`, `0.0` on failure.
    pub fn f32_or_zero(&self) -> f32 {
        self.to_f32().unwrap_or_default()
    }

    /// Convert to `bool` (nonzero unsigned conversion).
    pub fn to_bool(&self) -> ValueResult<bool> {
        self.with(Value::to_bool)
    }

    /// Convert to `bool`, `false` on failure.
    pub fn bool_or_zero(&self) -> bool {
        self.to_bool().unwrap_or_default()
    }

    /// Convert to text.
    pub fn to_text(&self) -> ValueResult<String> {
        self.with(Value::to_text)
    }

    /// Convert to text, empty on failure.
    pub fn text_or_zero(&self) -> String {
        self.to_text().unwrap_or_default()
    }

    /// Convert to a timestamp.
    pub fn to_time(&self) -> ValueResult<Timestamp> {
        self.with(Value::to_time)
    }

    /// Convert to a timestamp, [`zero_time`] on failure.
    pub fn time_or_zero(&self) -> Timestamp {
        self.to_time().unwrap_or_else(|_| zero_time())
    }

    /// Convert to raw bytes.
    pub fn to_bytes(&self) -> ValueResult<Vec<u8>> {
        self.with(Value::to_bytes)
    }

    /// Convert to raw bytes, empty on failure.
    pub fn bytes_or_zero(&self) -> Vec<u8> {
        self.to_bytes().unwrap_or_default()
    }

    /// Convert to a byte (alias of [`to_u8`](Self::to_u8)).
    pub fn to_byte(&self) -> ValueResult<u8> {
        self.to_u8()
    }

    /// Convert to a byte, `0` on failure.
    pub fn byte_or_zero(&self) -> u8 {
        self.u8_or_zero()
    }
}

/// Sized integer accessors are truncating casts of the 64-bit conversions;
/// out-of-range values wrap.
macro_rules! sized_accessors {
    ($base:ident => $( $to:ident, $zero:ident: $t:ty );* $(;)?) => {
        impl Dyn {
            $(
                #[doc = concat!("Convert to `", stringify!($t), "` (wrapping).")]
                pub fn $to(&self) -> ValueResult<$t> {
                    self.$base().map(|v| v as $t)
                }

                #[doc = concat!("Convert to `", stringify!($t), "`, `0` on failure.")]
                pub fn $zero(&self) -> $t {
                    self.$to().unwrap_or_default()
                }
            )*
        }
    };
}

sized_accessors!(to_i64 =>
    to_i32, i32_or_zero: i32;
    to_i16, i16_or_zero: i16;
    to_i8, i8_or_zero: i8;
    to_isize, isize_or_zero: isize;
);

sized_accessors!(to_u64 =>
    to_u32, u32_or_zero: u32;
    to_u16, u16_or_zero: u16;
    to_u8, u8_or_zero: u8;
    to_usize, usize_or_zero: usize;
);

// ==================== From ====================

macro_rules! impl_from_for_dyn {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Dyn {
                fn from(v: $t) -> Self {
                    Self::new(v)
                }
            }
        )*
    };
}

impl_from_for_dyn!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, &str, String, Vec<u8>,
    &[u8], Seq, Map, Value,
);

impl<Tz: TimeZone> From<DateTime<Tz>> for Dyn {
    fn from(v: DateTime<Tz>) -> Self {
        Self::new(v)
    }
}

impl From<ValueError> for Dyn {
    fn from(e: ValueError) -> Self {
        Self::fail(e)
    }
}

impl From<ValueResult<Value>> for Dyn {
    fn from(r: ValueResult<Value>) -> Self {
        Self(r)
    }
}

impl From<Dyn> for ValueResult<Value> {
    fn from(d: Dyn) -> Self {
        d.0
    }
}
