//! Typed access to individual claim values
//!
//! A [`Claim`] wraps a single, possibly missing, JSON value. Every coercion is
//! independent and returns `None` when the value has a different shape, so
//! optional or attacker-controlled claims never produce errors.

use miniserde::json::{Number, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A read-only view over one claim value
#[derive(Debug, Clone, Copy, Default)]
pub struct Claim<'a> {
    value: Option<&'a Value>,
}

impl<'a> Claim<'a> {
    /// Wrap a value; `None` represents a missing claim
    pub fn new(value: Option<&'a Value>) -> Self {
        Self { value }
    }

    /// The underlying JSON value, if the claim is present
    pub fn raw(&self) -> Option<&'a Value> {
        self.value
    }

    /// Whether the claim exists (a JSON `null` counts as present)
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, Some(Value::Null))
    }

    /// The value as a string; only JSON strings match
    pub fn as_str(&self) -> Option<&'a str> {
        match self.value? {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The value as a list of strings
    ///
    /// A JSON array matches only if every element is a string. A plain string
    /// yields a single-element list, following the `aud` convention of
    /// RFC 7519 §4.1.3.
    pub fn as_array_of_strings(&self) -> Option<Vec<&'a str>> {
        match self.value? {
            Value::String(s) => Some(vec![s.as_str()]),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// The value as a double; any JSON number matches
    pub fn as_f64(&self) -> Option<f64> {
        match self.value? {
            Value::Number(number) => Some(number_to_f64(number)),
            _ => None,
        }
    }

    /// The value as an integer
    ///
    /// Numbers with a fractional part are rejected rather than truncated, as are
    /// values outside the `i64` range. `2.0` is accepted as `2`.
    pub fn as_i64(&self) -> Option<i64> {
        match self.value? {
            Value::Number(Number::I64(n)) => Some(*n),
            Value::Number(Number::U64(n)) => i64::try_from(*n).ok(),
            Value::Number(Number::F64(n)) => f64_to_i64(*n),
            _ => None,
        }
    }

    /// The value as a boolean; only JSON booleans match
    pub fn as_bool(&self) -> Option<bool> {
        match self.value? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The value as a NumericDate (seconds since the Unix epoch)
    ///
    /// Fractional seconds are kept; negative values lie before the epoch.
    /// Values that cannot be represented as a [`SystemTime`] yield `None`.
    pub fn as_date(&self) -> Option<SystemTime> {
        match self.value? {
            Value::Number(Number::U64(secs)) => UNIX_EPOCH.checked_add(Duration::from_secs(*secs)),
            Value::Number(Number::I64(secs)) if *secs >= 0 => {
                UNIX_EPOCH.checked_add(Duration::from_secs(secs.unsigned_abs()))
            }
            Value::Number(Number::I64(secs)) => {
                UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))
            }
            Value::Number(Number::F64(secs)) => {
                let offset = Duration::try_from_secs_f64(secs.abs()).ok()?;
                if secs.is_sign_negative() {
                    UNIX_EPOCH.checked_sub(offset)
                } else {
                    UNIX_EPOCH.checked_add(offset)
                }
            }
            _ => None,
        }
    }
}

fn number_to_f64(number: &Number) -> f64 {
    match *number {
        Number::U64(n) => n as f64,
        Number::I64(n) => n as f64,
        Number::F64(n) => n,
    }
}

fn f64_to_i64(n: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the bound below is 2^63
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    if !n.is_finite() || n.fract() != 0.0 || n < i64::MIN as f64 || n >= UPPER {
        return None;
    }
    Some(n as i64)
}
