//! Chain transforms.
//!
//! Each step consumes a [`Dyn`] and yields a new one. Apart from
//! [`Dyn::apply`] and [`Dyn::catch`], a held error passes through untouched.

use crate::dynamic::Dyn;
use crate::error::{ValueError, ValueResult};
use crate::value::{Map, Value};

impl Dyn {
    /// Run a caller-supplied step.
    ///
    /// The step sees the chain as is, held error included, plus `params`.
    ///
    /// ```rust
    /// use pliant_value::{Dyn, Value, ValueError};
    ///
    /// fn at_least(d: Dyn, params: &[Value]) -> Dyn {
    ///     let min = params.first().and_then(|p| p.to_i64().ok()).unwrap_or(0);
    ///     d.and_then(|v| match v.to_i64()? {
    ///         n if n >= min => Ok(v),
    ///         _ => Err(ValueError::custom("too small")),
    ///     })
    /// }
    ///
    /// let d = Dyn::new(3).apply(at_least, &[Value::Int(5)]);
    /// assert_eq!(d.to_i64().unwrap_err().to_string(), "too small");
    /// ```
    pub fn apply<F>(self, step: F, params: &[Value]) -> Dyn
    where
        F: FnOnce(Dyn, &[Value]) -> Dyn,
    {
        step(self, params)
    }

    /// Replace a held error with `fallback`; payloads pass through.
    pub fn catch(self, fallback: impl Into<Dyn>) -> Dyn {
        if self.is_err() { fallback.into() } else { self }
    }

    /// Clamp into `[min, max]` as a float.
    ///
    /// The input and both bounds are converted to `f64` first; the first
    /// failing conversion becomes the result.
    pub fn clip(self, min: impl Into<Dyn>, max: impl Into<Dyn>) -> Dyn {
        self.and_then(|v| {
            let (v, min, max) = float_bounds(&v, min.into(), max.into())?;
            let clipped = if v < min {
                min
            } else if v > max {
                max
            } else {
                v
            };
            Ok(Value::Float(clipped))
        })
    }

    /// Fail when outside `[min, max]`; otherwise yield the value as a float.
    pub fn limit(self, min: impl Into<Dyn>, max: impl Into<Dyn>) -> Dyn {
        self.and_then(|v| {
            let (value, min, max) = float_bounds(&v, min.into(), max.into())?;
            if value < min {
                tracing::trace!(value, min, "lower limit overflow");
                return Err(ValueError::LowerLimit { value, min });
            }
            if value > max {
                tracing::trace!(value, max, "upper limit overflow");
                return Err(ValueError::UpperLimit { value, max });
            }
            Ok(Value::Float(value))
        })
    }

    /// Replace the value by its entry in `table`, keyed by the value as text.
    pub fn lookup(self, table: &Map) -> Dyn {
        self.and_then(|v| {
            let key = v.to_text()?;
            match table.get(&key) {
                Some(found) => Ok(found.clone()),
                None => Err(ValueError::no_match(key)),
            }
        })
    }

    /// Keep the original value when its text form is one of `allowed`.
    pub fn one_of<I, S>(self, allowed: I) -> Dyn
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.and_then(|v| {
            let key = v.to_text()?;
            if allowed.into_iter().any(|candidate| candidate.as_ref() == key) {
                Ok(v)
            } else {
                Err(ValueError::no_match(key))
            }
        })
    }

    /// Uppercase the text form.
    pub fn upper(self) -> Dyn {
        self.and_then(|v| v.to_text().map(|s| Value::Text(s.to_uppercase())))
    }

    /// Lowercase the text form.
    pub fn lower(self) -> Dyn {
        self.and_then(|v| v.to_text().map(|s| Value::Text(s.to_lowercase())))
    }
}

fn float_bounds(v: &Value, min: Dyn, max: Dyn) -> ValueResult<(f64, f64, f64)> {
    Ok((v.to_f64()?, min.to_f64()?, max.to_f64()?))
}
