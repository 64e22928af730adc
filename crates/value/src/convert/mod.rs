//! Conversion engine.
//!
//! Best-effort coercion of a [`Value`] into native scalars. Numeric payloads
//! convert between each other with range-truncating casts, booleans count as
//! `1`/`0`, timestamps as epoch seconds, and text is parsed as a literal.
//! Everything else fails with [`ValueError::Conversion`].

pub(crate) mod int;
pub(crate) mod time;

use crate::error::{ValueError, ValueResult};
use crate::value::{Timestamp, Value};

pub use time::zero_time;

impl Value {
    /// Convert to `i64`.
    pub fn to_i64(&self) -> ValueResult<i64> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Uint(v) => Ok(*v as i64),
            Self::Float(v) => Ok(*v as i64),
            Self::Bool(v) => Ok(i64::from(*v)),
            Self::Timestamp(t) => Ok(t.timestamp()),
            Self::Text(s) => int::parse_int(s).ok_or_else(|| self.conversion_error("i64")),
            _ => Err(self.conversion_error("i64")),
        }
    }

    /// Convert to `u64`. Negative signed payloads wrap.
    pub fn to_u64(&self) -> ValueResult<u64> {
        match self {
            Self::Int(v) => Ok(*v as u64),
            Self::Uint(v) => Ok(*v),
            Self::Float(v) => Ok(*v as u64),
            Self::Bool(v) => Ok(u64::from(*v)),
            Self::Timestamp(t) => Ok(t.timestamp() as u64),
            Self::Text(s) => int::parse_uint(s).ok_or_else(|| self.conversion_error("u64")),
            _ => Err(self.conversion_error("u64")),
        }
    }

    /// Convert to `f64`.
    pub fn to_f64(&self) -> ValueResult<f64> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Uint(v) => Ok(*v as f64),
            Self::Float(v) => Ok(*v),
            Self::Bool(v) => Ok(f64::from(u8::from(*v))),
            Self::Timestamp(t) => Ok(t.timestamp() as f64),
            Self::Text(s) => int::parse_float(s).ok_or_else(|| self.conversion_error("f64")),
            _ => Err(self.conversion_error("f64")),
        }
    }

    /// Convert to `bool`: the unsigned conversion is nonzero.
    ///
    /// There is no dedicated boolean parser, so `"true"` fails while `"1"`
    /// succeeds.
    pub fn to_bool(&self) -> ValueResult<bool> {
        self.to_u64().map(|v| v != 0)
    }

    /// Convert to text.
    ///
    /// Integers format in decimal, floats with the shortest round-trip
    /// representation, timestamps as RFC 3339 with nanoseconds.
    pub fn to_text(&self) -> ValueResult<String> {
        match self {
            Self::Int(v) => Ok(v.to_string()),
            Self::Uint(v) => Ok(v.to_string()),
            Self::Float(v) => Ok(format_float(*v)),
            Self::Bool(v) => Ok(v.to_string()),
            Self::Text(s) => Ok(s.clone()),
            Self::Timestamp(t) => Ok(time::format_rfc3339_nano(t)),
            _ => Err(self.conversion_error("string")),
        }
    }

    /// Convert to a timestamp.
    ///
    /// Numbers are epoch seconds in the local timezone; text is matched
    /// against the known layouts in order.
    pub fn to_time(&self) -> ValueResult<Timestamp> {
        let converted = match self {
            Self::Int(v) => time::from_epoch(*v),
            Self::Uint(v) => time::from_epoch(*v as i64),
            Self::Float(v) => time::from_epoch(*v as i64),
            Self::Text(s) => time::parse_timestamp(s),
            Self::Timestamp(t) => Some(*t),
            _ => None,
        };
        converted.ok_or_else(|| self.conversion_error("timestamp"))
    }

    /// Convert to raw bytes. Only text and bytes succeed.
    pub fn to_bytes(&self) -> ValueResult<Vec<u8>> {
        match self {
            Self::Text(s) => Ok(s.as_bytes().to_vec()),
            Self::Bytes(b) => Ok(b.clone()),
            _ => Err(self.conversion_error("bytes")),
        }
    }

    fn conversion_error(&self, to: &'static str) -> ValueError {
        ValueError::conversion(self.kind(), to)
    }
}

fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned()
    } else {
        v.to_string()
    }
}
