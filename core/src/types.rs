//! Value types accepted by the URL builders.
//!
//! # Design
//! Query parameters on the search and user endpoints are free-form, so the
//! builders take an ordered slice of `(key, ParamValue)` pairs rather than a
//! fixed struct. `ParamValue` deserializes untagged from plain JSON scalars so
//! test vectors can carry parameter maps as ordinary objects.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single query-parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Rendered as `None`. Counts as absent for a user-list `argument`.
    Null,
}

/// Ordered query parameters. Rendering follows slice order.
pub type Params<'a> = [(&'a str, ParamValue)];

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(true) => f.write_str("True"),
            ParamValue::Bool(false) => f.write_str("False"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => f.write_str(&render_float(*x)),
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Null => f.write_str("None"),
        }
    }
}

/// Shortest round-trip form with a signed, two-digit exponent: `7.0`,
/// `1e+20`, `1e-05`, `nan`, `-inf`.
fn render_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug keeps the fractional part on whole numbers and switches to
    // exponent form outside 1e-4..1e16.
    let repr = format!("{x:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}
