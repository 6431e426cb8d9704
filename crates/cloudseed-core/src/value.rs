//! Physical parameter values.

use core::fmt;

/// A physical value pushed to a [`ReverbEngine`](crate::ReverbEngine).
///
/// Engines receive one of three shapes depending on the parameter's
/// [`ParamKind`](crate::ParamKind): sample counts, step counts and seeds are
/// integers, switches are booleans, everything else is a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Continuous value: gain, frequency, rate, or pass-through amount.
    Float(f64),
    /// Integer value: length in samples, step count, or seed.
    Int(i32),
    /// Switch state.
    Bool(bool),
}

impl ParamValue {
    /// Returns the value as a float; integers are widened, booleans are 0 or 1.
    pub fn as_f64(self) -> f64 {
        match self {
            ParamValue::Float(v) => v,
            ParamValue::Int(v) => f64::from(v),
            ParamValue::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Returns the integer payload, if this is an `Int`.
    pub fn as_int(self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a `Bool`.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub const fn type_name(self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::Int(_) => "int",
            ParamValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}
