//! Literal values appearing in constants, attribute arguments and defaults.

use serde::Serialize;

use crate::error::ValueTypeError;

/// A literal parsed from IDL source.
///
/// Numeric literals keep the signedness they were written with: a leading `-`
/// yields [`Value::Int`], anything else without `.`/`e` yields [`Value::UInt`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    List(Vec<Value>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn try_bool(&self) -> Result<bool, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    /// Integer view of the literal; unsigned literals are accepted when they fit.
    pub fn try_i64(&self) -> Result<i64, ValueTypeError> {
        match self {
            Value::Int(v) => Ok(*v),
            Value::UInt(v) => i64::try_from(*v).map_err(|_| self.type_mismatch("Int")),
            _ => Err(self.type_mismatch("Int")),
        }
    }

    pub fn try_u64(&self) -> Result<u64, ValueTypeError> {
        match self {
            Value::UInt(v) => Ok(*v),
            _ => Err(self.type_mismatch("UInt")),
        }
    }

    /// Floating point view; integer literals widen.
    pub fn try_f64(&self) -> Result<f64, ValueTypeError> {
        match self {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            Value::UInt(v) => Ok(*v as f64),
            _ => Err(self.type_mismatch("Float")),
        }
    }

    pub fn try_str(&self) -> Result<&str, ValueTypeError> {
        match self {
            Value::String(v) => Ok(v),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_list(&self) -> Result<&[Value], ValueTypeError> {
        match self {
            Value::List(v) => Ok(v),
            _ => Err(self.type_mismatch("List")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::UInt(_) => "UInt",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::List(_) => "List",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
