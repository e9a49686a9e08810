//! Parameter value storage types.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single hyperparameter value.
///
/// Used both as the candidate type of a [`Choice`](crate::distribution::Choice)
/// and as the value type of a [`Params`] mapping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamValue {
    /// A floating-point value.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A boolean flag.
    Bool(bool),
    /// A string value, e.g. an objective or booster name.
    Str(String),
}

/// Hyperparameter configuration, keyed by parameter name.
pub type Params = HashMap<String, ParamValue>;

impl ParamValue {
    /// Returns the value as `f64` if it is numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `bool` if it is a flag.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as `&str` if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(ParamValue::from(0.5), ParamValue::Float(0.5));
        assert_eq!(ParamValue::from(3_i64), ParamValue::Int(3));
        assert_eq!(ParamValue::from(3_i32), ParamValue::Int(3));
        assert_eq!(ParamValue::from(true), ParamValue::Bool(true));
        assert_eq!(ParamValue::from("gbdt"), ParamValue::Str("gbdt".into()));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn accessors() {
        assert_eq!(ParamValue::Int(4).as_f64(), Some(4.0));
        assert_eq!(ParamValue::Float(0.1).as_i64(), None);
        assert_eq!(ParamValue::Bool(false).as_bool(), Some(false));
        assert_eq!(ParamValue::from("dart").as_str(), Some("dart"));
        assert_eq!(ParamValue::from("dart").as_f64(), None);
    }

    #[test]
    fn display() {
        assert_eq!(ParamValue::Int(7).to_string(), "7");
        assert_eq!(ParamValue::from("l2").to_string(), "l2");
    }
}
